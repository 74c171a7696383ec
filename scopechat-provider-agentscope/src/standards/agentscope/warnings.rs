//! Call warnings for settings AgentScope ignores.

use crate::types::{ChatRequest, ResponseFormat, Warning};

pub fn collect_warnings(request: &ChatRequest) -> Vec<Warning> {
    let mut warnings: Vec<Warning> = request
        .tools
        .iter()
        .flatten()
        .map(|tool| Warning::UnsupportedTool {
            tool_name: tool.name.clone(),
            details: Some("AgentScope does not support caller-defined tools".to_string()),
        })
        .collect();

    if request.tool_choice.is_some() {
        warnings.push(unsupported_setting(
            "toolChoice",
            "AgentScope does not support tool choice",
        ));
    }
    if request.common_params.top_k.is_some() {
        warnings.push(unsupported_setting("topK", "AgentScope ignores topK"));
    }
    if matches!(request.response_format, Some(ResponseFormat::Json { .. })) {
        warnings.push(unsupported_setting(
            "responseFormat",
            "AgentScope only supports text output",
        ));
    }
    warnings
}

fn unsupported_setting(setting: &str, details: &str) -> Warning {
    Warning::UnsupportedSetting {
        setting: setting.to_string(),
        details: Some(details.to_string()),
    }
}
