mod metric_tests;
