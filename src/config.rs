use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Id of the optional `<script type="application/json">` element whose body
/// overrides any of the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Tunables for the page behaviors. Every field has a default, so an override
/// document only needs the keys it changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Header gets its "scrolled" look past this offset.
    pub header_scrolled_after_px: f64,
    /// Header slides away when scrolling down past this offset.
    pub header_hide_after_px: f64,
    pub anchor_margin_px: f64,
    pub section_lookahead_px: f64,
    pub highlight_throttle_ms: u32,

    pub toast_enter_delay_ms: u32,
    pub toast_display_ms: u32,
    pub toast_exit_ms: u32,

    pub redirect_delay_ms: u32,
    pub messaging_base_url: String,
    pub messaging_recipient: String,
    pub service_labels: HashMap<String, String>,

    pub preload_images: Vec<String>,
    pub reveal_selectors: Vec<String>,
    /// Visible fraction that counts as "in view" for the fade-in.
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub contact_channels: Vec<String>,

    /// `tracing` level filter for console output.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_scrolled_after_px: 100.0,
            header_hide_after_px: 200.0,
            anchor_margin_px: 20.0,
            section_lookahead_px: 50.0,
            highlight_throttle_ms: 100,
            toast_enter_delay_ms: 100,
            toast_display_ms: 4000,
            toast_exit_ms: 300,
            redirect_delay_ms: 1500,
            messaging_base_url: "https://wa.me/".to_string(),
            messaging_recipient: "5521994503162".to_string(),
            service_labels: default_service_labels(),
            preload_images: vec![
                "https://user-gen-media-assets.s3.amazonaws.com/gemini_images/59ebc98e-bcbd-4401-a07b-c9fd2cba3753.png".to_string(),
                "https://pplx-res.cloudinary.com/image/upload/v1758383430/pplx_project_search_images/3244aaac6b3644986d7b95f5e05543003dae0963.png".to_string(),
                "https://pplx-res.cloudinary.com/image/upload/v1758383430/pplx_project_search_images/bb18d6711974d28545d962779fc832893e7eb13d.png".to_string(),
            ],
            reveal_selectors: vec![
                ".servico-card".to_string(),
                ".atuacao__card".to_string(),
                ".feature".to_string(),
                ".stat".to_string(),
            ],
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            contact_channels: vec![
                "🏛️ Licitador - Site carregado com sucesso!".to_string(),
                "📱 WhatsApp: +55 21 9 9450-3162".to_string(),
                "📧 E-mail: contato@licitador.com.br".to_string(),
            ],
            log_level: "info".to_string(),
        }
    }
}

fn default_service_labels() -> HashMap<String, String> {
    [
        ("basico", "Pacote Básico - Análise de Edital"),
        (
            "intermediario",
            "Pacote Intermediário - Acompanhamento da Licitação",
        ),
        ("completo", "Pacote Completo - Gestão Jurídica da Licitação"),
        ("treinamento", "Treinamentos e Workshops"),
        ("parecer", "Parecer Jurídico Pontual"),
        ("impugnacao", "Assessoria para Impugnação de Editais"),
        ("consorcio", "Consultoria para Consórcios"),
    ]
    .into_iter()
    .map(|(code, label)| (code.to_string(), label.to_string()))
    .collect()
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Selector list for the reveal rule, joined for `querySelectorAll`.
    pub fn reveal_selector(&self) -> String {
        self.reveal_selectors.join(", ")
    }

    pub fn service_label<'a>(&'a self, code: &'a str) -> &'a str {
        self.service_labels
            .get(code)
            .map(String::as_str)
            .unwrap_or(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let cfg = SiteConfig::from_json(r#"{ "redirect_delay_ms": 10, "log_level": "debug" }"#)
            .unwrap();
        assert_eq!(cfg.redirect_delay_ms, 10);
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.toast_display_ms, 4000);
        assert_eq!(cfg.service_labels.len(), 7);
    }

    #[test]
    fn malformed_override_is_a_config_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn unknown_service_code_passes_through() {
        let cfg = SiteConfig::default();
        assert_eq!(
            cfg.service_label("basico"),
            "Pacote Básico - Análise de Edital"
        );
        assert_eq!(cfg.service_label("outro"), "outro");
    }

    #[test]
    fn reveal_selector_joins_all_targets() {
        let cfg = SiteConfig::default();
        assert_eq!(
            cfg.reveal_selector(),
            ".servico-card, .atuacao__card, .feature, .stat"
        );
    }
}
