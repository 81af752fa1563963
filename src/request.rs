//! The `Page.printToPDF` request object

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// DevTools method that consumes a [`PrintToPdfRequest`]
pub const PRINT_TO_PDF_METHOD: &str = "Page.printToPDF";

/// Parameters for the DevTools `Page.printToPDF` command
///
/// Every field is optional. Unset fields are omitted when serialized, which
/// leaves them at the browser's own defaults. Paper sizes and margins are in
/// inches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintToPdfRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landscape: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_header_footer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_background: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f64>,
    /// Page ranges to print, e.g. `"1-5, 8, 11-13"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_ranges: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_invalid_page_ranges: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_template: Option<String>,
    #[serde(rename = "preferCSSPageSize", skip_serializing_if = "Option::is_none")]
    pub prefer_css_page_size: Option<bool>,
}

impl PrintToPdfRequest {
    /// Serialize to the `params` object of a DevTools command
    pub fn to_params(&self) -> crate::Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Wrap the request in a complete DevTools command envelope
    pub fn to_command(&self, id: u64) -> crate::Result<Value> {
        Ok(json!({
            "id": id,
            "method": PRINT_TO_PDF_METHOD,
            "params": self.to_params()?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_serializes_empty() {
        let request = PrintToPdfRequest::default();
        assert_eq!(serde_json::to_string(&request).unwrap(), "{}");
    }

    #[test]
    fn test_field_names_match_devtools() {
        let request = PrintToPdfRequest {
            landscape: Some(true),
            display_header_footer: Some(false),
            paper_width: Some(8.5),
            margin_top: Some(0.4),
            page_ranges: Some("1-3,5".to_string()),
            ignore_invalid_page_ranges: Some(true),
            prefer_css_page_size: Some(true),
            ..Default::default()
        };

        let params = request.to_params().unwrap();
        assert_eq!(params["landscape"], json!(true));
        assert_eq!(params["displayHeaderFooter"], json!(false));
        assert_eq!(params["paperWidth"], json!(8.5));
        assert_eq!(params["marginTop"], json!(0.4));
        assert_eq!(params["pageRanges"], json!("1-3,5"));
        assert_eq!(params["ignoreInvalidPageRanges"], json!(true));
        assert_eq!(params["preferCSSPageSize"], json!(true));
        assert!(params.get("paperHeight").is_none());
        assert!(params.get("headerTemplate").is_none());
    }

    #[test]
    fn test_command_envelope() {
        let request = PrintToPdfRequest {
            scale: Some(0.8),
            ..Default::default()
        };

        let command = request.to_command(7).unwrap();
        assert_eq!(command["id"], json!(7));
        assert_eq!(command["method"], json!("Page.printToPDF"));
        assert_eq!(command["params"], json!({ "scale": 0.8 }));
    }

    #[test]
    fn test_deserialize_partial() {
        let request: PrintToPdfRequest =
            serde_json::from_str(r#"{"printBackground": true, "preferCSSPageSize": false}"#).unwrap();
        assert_eq!(request.print_background, Some(true));
        assert_eq!(request.prefer_css_page_size, Some(false));
        assert_eq!(request.landscape, None);
    }
}
