use crate::analyze::AnalyzeError;
use crate::conf::ConfigError;

/// Remediation text for the failures users hit most often.
pub fn error_hint(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(err) = err.downcast_ref::<AnalyzeError>() {
        return analyze_error_hint(err);
    }
    if let Some(err) = err.downcast_ref::<ConfigError>() {
        return config_error_hint(err);
    }
    None
}

pub fn analyze_error_hint(err: &AnalyzeError) -> Option<&'static str> {
    match err {
        AnalyzeError::ModuleNotFound { .. } => Some(
            "Run `logscope modules` to list the configured modules.\n\
             \n\
             Additional modules can be declared in a config file:\n\
             \n\
             [[module]]\n\
             name = \"search-api\"\n\
             path = \"../search-api/logs/app.log\"",
        ),

        AnalyzeError::SourceUnavailable { .. } => Some(
            "Module paths are resolved relative to the config file's directory,\n\
             or to the working directory when no config file is given.",
        ),

        AnalyzeError::MalformedRecord { .. } => Some(
            "Every line must be a JSON object with a \"timestamp\" such as\n\
             \"2023-10-07T10:15:00.000000Z\".\n\
             \n\
             Pass --skip-malformed to skip and count bad lines instead.",
        ),

        AnalyzeError::Config(err) => config_error_hint(err),

        _ => None,
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::DuplicateModule { .. } => {
            Some("Each [[module]] entry must have a unique name.")
        }

        ConfigError::EmptyModuleName | ConfigError::EmptyModulePath { .. } => Some(
            "Modules need both a name and a path:\n\
             \n\
             [[module]]\n\
             name = \"poke-api\"\n\
             path = \"../poke-api/logs/app.log\"",
        ),

        _ => None,
    }
}
