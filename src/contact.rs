//! Contact form: validation, message formatting and the messaging deep link.
//!
//! Submission runs through `SubmitPhase`:
//! `Idle -> Validating -> (Rejected | Formatting -> Redirecting -> Idle)`.
//! Validation failures leave the form populated; anything that goes wrong
//! after validation is reported as `SubmitError::Unexpected`.

use std::sync::LazyLock;

use hashbrown::HashMap;
use regex::Regex;
use thiserror::Error;
use url::Url;

use crate::config::SiteConfig;
use crate::error::SiteError;

pub const FIELD_NAME: &str = "nome";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "telefone";
pub const FIELD_SERVICE: &str = "servico";
pub const FIELD_COMPANY: &str = "empresa";
pub const FIELD_MESSAGE: &str = "mensagem";

pub const REQUIRED_FIELDS: [&str; 4] = [FIELD_NAME, FIELD_EMAIL, FIELD_PHONE, FIELD_SERVICE];

pub const LOADING_LABEL: &str = "Enviando...";
pub const PREPARED_NOTICE: &str = "Mensagem preparada! Você será redirecionado para o WhatsApp.";
pub const UNEXPECTED_NOTICE: &str = "Ocorreu um erro ao enviar a mensagem. Tente novamente.";

const BANNER: &str = "🏛️ *LICITADOR - Consultoria Jurídica*";
const FOOTER: &str = "_Enviado através do site www.licitador.com.br_";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is valid")
});

/// Rejections shown to the visitor. The display text is the toast body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, preencha todos os campos obrigatórios.")]
    MissingRequired,
    #[error("Por favor, insira um e-mail válido.")]
    InvalidEmail,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("unexpected failure preparing message: {0}")]
    Unexpected(#[from] SiteError),
}

impl SubmitError {
    /// Toast body for this failure.
    pub fn notice(&self) -> String {
        match self {
            SubmitError::Validation(v) => v.to_string(),
            SubmitError::Unexpected(_) => UNEXPECTED_NOTICE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Rejected(ValidationError),
    Formatting,
    Redirecting,
}

impl SubmitPhase {
    pub fn label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "idle",
            SubmitPhase::Validating => "validating",
            SubmitPhase::Rejected(_) => "rejected",
            SubmitPhase::Formatting => "formatting",
            SubmitPhase::Redirecting => "redirecting",
        }
    }
}

/// Field values captured from the form at submit time.
#[derive(Debug, Clone, Default)]
pub struct FormPayload {
    fields: HashMap<String, String>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Value as entered, or empty when the field was not submitted.
    fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// A byte-order mark counts as blank, the same as in the page's own
    /// inputs.
    fn is_blank(&self, name: &str) -> bool {
        self.value(name).trim_matches(is_form_space).is_empty()
    }

    /// Optional fields count as present when they are non-empty.
    fn optional(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let blank = REQUIRED_FIELDS
            .iter()
            .any(|f| self.is_blank(f));
        if blank {
            return Err(ValidationError::MissingRequired);
        }
        if !is_valid_email(self.value(FIELD_EMAIL)) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for FormPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = FormPayload::new();
        for (k, v) in iter {
            payload.insert(k, v);
        }
        payload
    }
}

fn is_form_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Builds the chat message sent to the consultancy.
pub fn format_message(payload: &FormPayload, cfg: &SiteConfig) -> String {
    let mut msg = format!("{BANNER}\n\n");
    msg.push_str(&format!("👤 *Nome:* {}\n", payload.value(FIELD_NAME)));

    if let Some(company) = payload.optional(FIELD_COMPANY) {
        msg.push_str(&format!("🏢 *Empresa:* {company}\n"));
    }

    msg.push_str(&format!("📧 *E-mail:* {}\n", payload.value(FIELD_EMAIL)));
    msg.push_str(&format!("📱 *Telefone:* {}\n", payload.value(FIELD_PHONE)));
    msg.push_str(&format!(
        "⚖️ *Serviço de Interesse:* {}\n",
        cfg.service_label(payload.value(FIELD_SERVICE))
    ));

    if let Some(note) = payload.optional(FIELD_MESSAGE) {
        msg.push_str(&format!("💬 *Mensagem:*\n{note}\n"));
    }

    msg.push_str("\n---\n");
    msg.push_str(FOOTER);
    msg
}

/// `https://<service>/<recipient>?text=<message>`.
pub fn deep_link(message: &str, cfg: &SiteConfig) -> Result<Url, SiteError> {
    let raw = format!(
        "{}{}?text={}",
        cfg.messaging_base_url,
        cfg.messaging_recipient,
        urlencoding::encode(message)
    );
    Ok(Url::parse(&raw)?)
}

/// A validated submission, ready to hand off.
#[derive(Debug, Clone)]
pub struct PreparedMessage {
    pub text: String,
    pub link: Url,
}

impl PreparedMessage {
    /// Formats an already validated payload and builds its deep link.
    fn build(payload: &FormPayload, cfg: &SiteConfig) -> Result<Self, SiteError> {
        let text = format_message(payload, cfg);
        let link = deep_link(&text, cfg)?;
        Ok(Self { text, link })
    }
}

/// Validates and formats a submission in one go.
pub fn prepare(payload: &FormPayload, cfg: &SiteConfig) -> Result<PreparedMessage, SubmitError> {
    payload.validate()?;
    Ok(PreparedMessage::build(payload, cfg)?)
}

/// Deep-link opens scheduled after successful submits. Every submit keeps
/// its own task until it has run, so quick resubmits each open their link.
/// `H` is the handle that cancels the task when dropped.
#[derive(Debug)]
pub struct PendingRedirects<H> {
    tasks: HashMap<u64, H>,
    next_id: u64,
}

impl<H> Default for PendingRedirects<H> {
    fn default() -> Self {
        Self {
            tasks: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<H> PendingRedirects<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for the next task, handed to its callback before it is scheduled.
    pub fn reserve(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn hold(&mut self, id: u64, task: H) {
        self.tasks.insert(id, task);
    }

    /// Takes back the handle of a task that has run.
    pub fn release(&mut self, id: u64) -> Option<H> {
        self.tasks.remove(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> FormPayload {
        [
            (FIELD_NAME, "Maria Souza"),
            (FIELD_EMAIL, "a@b.com"),
            (FIELD_PHONE, "(21) 99999-0000"),
            (FIELD_SERVICE, "basico"),
        ]
        .into_iter()
        .collect()
    }

    fn text_param(link: &Url) -> String {
        link.query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap()
    }

    #[test]
    fn any_blank_required_field_is_rejected() {
        let cfg = SiteConfig::default();
        for field in REQUIRED_FIELDS {
            for blank in ["", "   ", "\t\n"] {
                let mut p = valid_payload();
                p.insert(field, blank);
                let err = prepare(&p, &cfg).unwrap_err();
                assert!(matches!(
                    err,
                    SubmitError::Validation(ValidationError::MissingRequired)
                ));
            }
        }
    }

    #[test]
    fn absent_required_field_is_rejected() {
        let p: FormPayload = [(FIELD_NAME, "x"), (FIELD_EMAIL, "a@b.com")]
            .into_iter()
            .collect();
        assert_eq!(p.validate(), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn email_shape_is_checked_after_required_fields() {
        let mut p = valid_payload();
        assert_eq!(p.validate(), Ok(()));

        p.insert(FIELD_EMAIL, "not-an-email");
        assert_eq!(p.validate(), Err(ValidationError::InvalidEmail));

        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(is_valid_email("contato@licitador.com.br"));
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert!(!is_valid_email("a\u{FEFF}b@c.com"));
        assert!(!is_valid_email("ab@c.com\u{FEFF}"));

        let mut p = valid_payload();
        p.insert(FIELD_NAME, "\u{FEFF}");
        assert_eq!(p.validate(), Err(ValidationError::MissingRequired));
        p.insert(FIELD_NAME, " \u{FEFF}\t");
        assert_eq!(p.validate(), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn rejection_notices_are_distinct() {
        let missing = SubmitError::from(ValidationError::MissingRequired).notice();
        let invalid = SubmitError::from(ValidationError::InvalidEmail).notice();
        assert_ne!(missing, invalid);
        assert_eq!(invalid, "Por favor, insira um e-mail válido.");
    }

    #[test]
    fn message_uses_service_label_and_fixed_order() {
        let cfg = SiteConfig::default();
        let msg = format_message(&valid_payload(), &cfg);

        assert!(msg.starts_with("🏛️ *LICITADOR - Consultoria Jurídica*\n\n"));
        assert!(msg.contains("Pacote Básico - Análise de Edital"));
        assert!(msg.ends_with("\n---\n_Enviado através do site www.licitador.com.br_"));
        assert!(!msg.contains("Empresa"));
        assert!(!msg.contains("Mensagem"));

        let name = msg.find("*Nome:*").unwrap();
        let email = msg.find("*E-mail:*").unwrap();
        let phone = msg.find("*Telefone:*").unwrap();
        let service = msg.find("*Serviço de Interesse:*").unwrap();
        assert!(name < email && email < phone && phone < service);
    }

    #[test]
    fn optional_fields_are_included_when_present() {
        let cfg = SiteConfig::default();
        let mut p = valid_payload();
        p.insert(FIELD_COMPANY, "Construtora XYZ");
        p.insert(FIELD_MESSAGE, "Preciso de ajuda\ncom um edital.");
        let msg = format_message(&p, &cfg);

        let company = msg.find("🏢 *Empresa:* Construtora XYZ\n").unwrap();
        assert!(company < msg.find("*E-mail:*").unwrap());
        assert!(msg.contains("💬 *Mensagem:*\nPreciso de ajuda\ncom um edital.\n\n---\n"));
    }

    #[test]
    fn unknown_service_code_is_kept_verbatim() {
        let cfg = SiteConfig::default();
        let mut p = valid_payload();
        p.insert(FIELD_SERVICE, "outro");
        let msg = format_message(&p, &cfg);
        assert!(msg.contains("⚖️ *Serviço de Interesse:* outro\n"));
    }

    #[test]
    fn deep_link_text_decodes_to_the_message() {
        let cfg = SiteConfig::default();
        let mut p = valid_payload();
        p.insert(FIELD_MESSAGE, "50% & mais + ?=#");
        let prepared = prepare(&p, &cfg).unwrap();

        assert_eq!(prepared.link.host_str(), Some("wa.me"));
        assert_eq!(prepared.link.path(), "/5521994503162");
        assert_eq!(text_param(&prepared.link), prepared.text);
    }

    #[test]
    fn bad_messaging_base_is_unexpected_not_validation() {
        let cfg = SiteConfig {
            messaging_base_url: "not a url/".to_string(),
            ..SiteConfig::default()
        };
        let err = prepare(&valid_payload(), &cfg).unwrap_err();
        assert!(matches!(err, SubmitError::Unexpected(SiteError::DeepLink(_))));
        assert_eq!(err.notice(), UNEXPECTED_NOTICE);
    }

    #[test]
    fn resubmitting_keeps_earlier_redirects_alive() {
        let mut pending = PendingRedirects::new();
        let first = pending.reserve();
        pending.hold(first, "first");
        let second = pending.reserve();
        pending.hold(second, "second");
        assert_ne!(first, second);

        assert_eq!(pending.release(first), Some("first"));
        assert!(!pending.is_empty());
        assert_eq!(pending.release(first), None);
        assert_eq!(pending.release(second), Some("second"));
        assert!(pending.is_empty());
    }
}
