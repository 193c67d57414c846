//! Canned chat announcements for the tender session.
//!
//! Six fixed templates. Edital items come from [`Citations`]; the only free
//! inputs are the return date, the granted appeal minutes and the denial
//! reason, each with the default the officer normally uses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::CockpitError;
use crate::config::Citations;

pub const DEFAULT_RETURN_DATE: &str = "a ser informada via sistema";
pub const DEFAULT_GRANTED_MINUTES: &str = "20";
pub const DEFAULT_DENIAL_REASON: &str =
    "alegação genérica sobre preços, sem apontar vício específico";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    SuspensionForReview,
    AdjustedSpreadsheet,
    QualificationDocs,
    AppealWindow,
    DenyAppeal,
    UnviablePrice,
}

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::SuspensionForReview,
        Scenario::AdjustedSpreadsheet,
        Scenario::QualificationDocs,
        Scenario::AppealWindow,
        Scenario::DenyAppeal,
        Scenario::UnviablePrice,
    ];

    /// Stable CLI name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SuspensionForReview => "suspension-for-review",
            Self::AdjustedSpreadsheet => "adjusted-spreadsheet",
            Self::QualificationDocs => "qualification-docs",
            Self::AppealWindow => "appeal-window",
            Self::DenyAppeal => "deny-appeal",
            Self::UnviablePrice => "unviable-price",
        }
    }

    /// Label shown to the officer.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SuspensionForReview => "Suspensão para Análise",
            Self::AdjustedSpreadsheet => "Solicitação de Planilha Ajustada",
            Self::QualificationDocs => "Solicitação de Habilitação",
            Self::AppealWindow => "Abertura de Prazo Recursal",
            Self::DenyAppeal => "Recusa de Intenção de Recurso",
            Self::UnviablePrice => "Desclassificação (Preço Inexequível)",
        }
    }

    /// Names of the parameters the template reads.
    pub fn parameters(&self) -> &'static [&'static str] {
        match self {
            Self::SuspensionForReview => &["return_date"],
            Self::AppealWindow => &["granted_minutes"],
            Self::DenyAppeal => &["denial_reason"],
            Self::AdjustedSpreadsheet | Self::QualificationDocs | Self::UnviablePrice => &[],
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = CockpitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|sc| sc.name().eq_ignore_ascii_case(needle) || sc.label() == needle)
            .ok_or_else(|| CockpitError::UnknownScenario(s.to_string()))
    }
}

/// Free-text inputs. Each scenario reads only its own field; unset fields
/// fall back to the defaults above.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementParams {
    pub return_date: Option<String>,
    pub granted_minutes: Option<String>,
    pub denial_reason: Option<String>,
}

/// Render the announcement for `scenario`. No scenario selected renders
/// nothing.
pub fn render_announcement(
    scenario: Option<Scenario>,
    params: &AnnouncementParams,
    citations: &Citations,
) -> String {
    let Some(scenario) = scenario else {
        return String::new();
    };
    debug!(scenario = %scenario, "rendering announcement");

    match scenario {
        Scenario::SuspensionForReview => {
            let return_date = params.return_date.as_deref().unwrap_or(DEFAULT_RETURN_DATE);
            format!(
                "Srs. Licitantes, a sessão será suspensa neste momento para análise detalhada \
                 da documentação técnica e contábil, com base no item {} do Edital. A data de \
                 retomada será {}. Acompanhem as mensagens pelo sistema.",
                citations.suspension_item, return_date
            )
        }
        Scenario::AdjustedSpreadsheet => format!(
            "Srs. Licitantes, convoco a empresa classificada provisoriamente em 1º lugar para o \
             envio da Planilha de Preços readequada ao lance vencedor (Anexo II), no prazo de 2 \
             (duas) horas, conforme Item {} do Edital. Atentem-se para não ultrapassar duas casas \
             decimais.",
            citations.spreadsheet_item
        ),
        Scenario::QualificationDocs => format!(
            "Srs. Licitantes, solicito o envio dos documentos de Habilitação (Jurídica, Fiscal, \
             Econômica e Técnica) via sistema, no prazo de 2 (duas) horas, conforme Item {} do \
             Edital. Lembro que os atestados devem cumprir o requisito de Ativo Total ({}) do \
             item {}.",
            citations.qualification_item,
            citations.asset_threshold_label,
            citations.asset_threshold_item
        ),
        Scenario::AppealWindow => {
            let minutes = params
                .granted_minutes
                .as_deref()
                .unwrap_or(DEFAULT_GRANTED_MINUTES);
            format!(
                "Srs. Licitantes, declaro o vencedor do certame. Abro neste momento o prazo de {} \
                 minutos para manifestação motivada de intenção de recurso, conforme Item {} do \
                 Edital. A não manifestação imediata e motivada neste prazo implicará na \
                 decadência do direito de recurso.",
                minutes, citations.appeal_item
            )
        }
        Scenario::DenyAppeal => {
            let reason = params
                .denial_reason
                .as_deref()
                .unwrap_or(DEFAULT_DENIAL_REASON);
            format!(
                "Pregoeiro indefere a intenção de recurso registrada pela licitante, pois a \
                 manifestação não apresentou motivação concreta ou fática, tratando-se apenas de \
                 {}. Conforme jurisprudência do TCU e item {} do Edital, a falta de motivação \
                 imediata acarreta a perda do direito.",
                reason, citations.appeal_denial_item
            )
        }
        Scenario::UnviablePrice => format!(
            "A proposta foi desclassificada por apresentar preço manifestamente inexequível, \
             inferior a {}% da média dos lances ofertados, conforme critério objetivo \
             estabelecido no item {} do Edital, não tendo a licitante demonstrado sua \
             viabilidade.",
            citations.unviable_price_percent, citations.unviable_price_item
        ),
    }
}
