//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the analysis, rewriting, and grammar entry points to AI assistants
//! over stdio. The server is a presentation layer: every `#[tool]` method
//! delegates to `tonewright_core` and only handles parameter parsing, the
//! input size limit, and serialization.

use std::str::FromStr;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use tonewright_core::{
    DEFAULT_MAX_INPUT_BYTES, ToneFlag, ToneOptions, analysis, grammar, markdown, rewrite,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `enhance_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct EnhanceTextParams {
    /// The text to rewrite.
    pub text: String,
    /// Tones to apply: formal, casual, professional, friendly, concise,
    /// detailed. Omit to use the server's configured tones.
    #[serde(default)]
    pub tones: Vec<String>,
}

/// Parameters for the `check_grammar` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckGrammarParams {
    /// The text to check.
    pub text: String,
    /// Whether to strip markdown formatting before checking.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// MCP server exposing tonewright to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
    default_tone: ToneOptions,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server with the default input limit and no default tones.
    pub fn new() -> Self {
        Self::with_limit(Some(DEFAULT_MAX_INPUT_BYTES), ToneOptions::default())
    }

    /// Create a server with an explicit input limit (`None` disables it) and
    /// the tones `enhance_text` uses when the caller names none.
    pub fn with_limit(max_input_bytes: Option<usize>, default_tone: ToneOptions) -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes,
            default_tone,
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!(
                    "input too large: {} bytes (limit: {max} bytes)",
                    text.len()
                ),
                None,
            )),
            _ => Ok(()),
        }
    }

    /// Get project information.
    #[tool(description = "Get project name, version, description, and the available tones")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let tones: Vec<&str> = ToneFlag::ALL.iter().map(|t| t.as_str()).collect();
        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "tones": tones,
            "max_input_bytes": self.max_input_bytes,
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}\nTones: {}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
                ToneFlag::available(),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score readability and suggest improvements.
    #[tool(
        description = "Analyze text: Flesch Reading Ease score and level, word/sentence/paragraph counts, complex words, passive sentences, and improvement suggestions."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_text",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let report = if params.strip_markdown {
            analysis::analyze(&markdown::strip_to_prose(&params.text))
        } else {
            analysis::analyze(&params.text)
        };

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "analyze_text",
            score = report.readability_score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Rewrite text in the requested tones.
    #[tool(
        description = "Rewrite text: fixes common misspellings and grammar slips, then applies the requested tones (formal, casual, professional, friendly, concise, detailed). Returns the rewritten text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", tones = ?params.tones))]
    fn enhance_text(
        &self,
        Parameters(params): Parameters<EnhanceTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "enhance_text", "executing MCP tool");
        self.check_size(&params.text)?;

        let tone = if params.tones.is_empty() {
            self.default_tone
        } else {
            let flags = params
                .tones
                .iter()
                .map(|name| ToneFlag::from_str(name))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            ToneOptions::from_flags(&flags)
        };

        let enhanced = rewrite::enhance(&params.text, &tone);

        tracing::info!(
            tool = "enhance_text",
            output_len = enhanced.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(enhanced)]))
    }

    /// Check grammar and passive voice in text.
    #[tool(
        description = "Check text for likely grammar slips (agreement, doubled words, missing capitals or end punctuation) and list passive-voice sentences. Never modifies the text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_grammar(
        &self,
        Parameters(params): Parameters<CheckGrammarParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "check_grammar",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_size(&params.text)?;

        let report = if params.strip_markdown {
            grammar::check_grammar_full(&markdown::strip_to_prose(&params.text))
        } else {
            grammar::check_grammar_full(&params.text)
        };

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "check_grammar",
            passive_count = report.passive_sentences.len(),
            issue_count = report.issues.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text for readability, enhance_text to rewrite \
                 in a tone, and check_grammar for grammar hints.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn server_info_has_correct_name() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn server_has_tools_capability() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_has_instructions() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains(env!("CARGO_PKG_NAME")));
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: "text".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_NAME")));
        assert!(text.contains("formal"));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value =
            serde_json::from_str(text).expect("output should be valid JSON");

        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["tones"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn analyze_text_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(AnalyzeTextParams {
            text: "The cat sat on the mat. The report was written yesterday.".to_string(),
            strip_markdown: false,
        });

        let result = server
            .analyze_text(params)
            .expect("analyze_text should succeed");
        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");

        assert_eq!(json["sentence_count"], 2);
        assert_eq!(json["passive_voices"].as_array().unwrap().len(), 1);
        assert!(json["readability_score"].as_f64().is_some());
    }

    #[test]
    fn analyze_text_strips_markdown() {
        let server = ProjectServer::new();
        let params = Parameters(AnalyzeTextParams {
            text: "# Heading words\n\nOne short line.\n\n```\ncode here\n```".to_string(),
            strip_markdown: true,
        });

        let result = server
            .analyze_text(params)
            .expect("analyze_text should succeed");
        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");

        assert_eq!(json["word_count"], 3);
    }

    #[test]
    fn enhance_text_tool_applies_tones() {
        let server = ProjectServer::new();
        let params = Parameters(EnhanceTextParams {
            text: "i dont know".to_string(),
            tones: vec!["formal".to_string()],
        });

        let result = server
            .enhance_text(params)
            .expect("enhance_text should succeed");
        assert_eq!(extract_text(&result), Some("I do not know."));
    }

    #[test]
    fn enhance_text_uses_default_tone() {
        let server = ProjectServer::with_limit(None, ToneOptions::from_flags(&[ToneFlag::Concise]));
        let params = Parameters(EnhanceTextParams {
            text: "We left in order to rest.".to_string(),
            tones: Vec::new(),
        });

        let result = server
            .enhance_text(params)
            .expect("enhance_text should succeed");
        assert_eq!(extract_text(&result), Some("We left to rest."));
    }

    #[test]
    fn enhance_text_rejects_unknown_tone() {
        let server = ProjectServer::new();
        let params = Parameters(EnhanceTextParams {
            text: "hello".to_string(),
            tones: vec!["sarcastic".to_string()],
        });

        let err = server.enhance_text(params).unwrap_err();
        assert!(err.message.contains("sarcastic"));
    }

    #[test]
    fn check_grammar_tool_works() {
        let server = ProjectServer::new();
        let params = Parameters(CheckGrammarParams {
            text: "The report was written by the team. She codes every day.".to_string(),
            strip_markdown: false,
        });

        let result = server
            .check_grammar(params)
            .expect("check_grammar should succeed");
        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");

        assert_eq!(json["sentence_count"], 2);
        assert_eq!(json["passive_sentences"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn oversize_input_is_rejected() {
        let server = ProjectServer::with_limit(Some(8), ToneOptions::default());
        let params = Parameters(CheckGrammarParams {
            text: "This text is longer than eight bytes.".to_string(),
            strip_markdown: false,
        });

        let err = server.check_grammar(params).unwrap_err();
        assert!(err.message.contains("input too large"));
    }
}
