//! Text rendering for the cockpit: banners, checklist, deadline metric and
//! copyable text blocks.
//!
//! Everything goes to stdout; logs stay on stderr so the copyable blocks can
//! be piped straight into the session chat.

use pregoeiro_core::{
    EligibilityVerdict, FinancialOutcome, Scenario, SessionState, TechnicalProfile, TenderConfig,
};
use serde::Serialize;

const RULE: &str = "────────────────────────────────────────";

// ── Public API ──

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Tender header.
pub fn print_header(config: &TenderConfig) {
    println!("=== Cockpit do Pregoeiro - {} ({}) ===", config.tender_id, config.agency);
    println!(
        "Objeto: {} | Valor Máx: {}",
        config.object,
        format_brl(config.estimated_value)
    );
    println!();
    println!("  {:<28} {}", "Patrimônio Líquido mínimo", format_brl(config.min_net_worth()));
    println!("  {:<28} {}", "Ativo Total mínimo (banco)", format_brl(config.min_bank_assets));
}

/// Both habilitação tracks and the overall recommendation.
pub fn print_verdict(
    verdict: &EligibilityVerdict,
    technical: &TechnicalProfile,
    unset_ratios: &[&str],
) {
    println!("1. Qualificação Econômico-Financeira");
    match verdict.financial.outcome {
        FinancialOutcome::IndicesAboveOne => {
            println!("  ✅ Índices superiores a 1.0. HABILITADO financeiramente.");
        }
        FinancialOutcome::NetWorthSufficient { net_worth, minimum } => {
            println!("  ⚠️ Um ou mais índices são ≤ 1.0. Verificando Patrimônio Líquido...");
            println!(
                "  ✅ PL ({}) supera o mínimo de {}. HABILITADO.",
                format_brl(net_worth),
                format_brl(minimum)
            );
        }
        FinancialOutcome::NetWorthInsufficient { minimum, .. } => {
            println!("  ⚠️ Um ou mais índices são ≤ 1.0. Verificando Patrimônio Líquido...");
            println!(
                "  ❌ PL insuficiente. Mínimo exigido: {}. INABILITADO.",
                format_brl(minimum)
            );
        }
    }
    if !unset_ratios.is_empty() {
        println!(
            "  ⚠️ Índices não informados ({}) foram considerados 0.00.",
            unset_ratios.join(", ")
        );
    }
    println!();

    println!("2. Qualificação Técnica (Atestados e Equipe)");
    for (label, ok) in technical.items() {
        println!("  [{}] {}", if ok { "x" } else { " " }, label);
    }
    if technical.bank_asset_threshold {
        println!("  ✔️ Confirmação de porte da instituição financeira atendida.");
    } else {
        println!("  ❌ Atenção: Verificar valor do Ativo Total no atestado.");
    }
    if verdict.technical_pass {
        println!("  ✅ Qualificação Técnica APROVADA");
    } else {
        println!(
            "  ❌ Pendências na Qualificação Técnica ({} de 8)",
            verdict.missing_attestations.len()
        );
    }

    println!("{RULE}");
    if verdict.overall_pass {
        println!("🏆 LICITANTE HABILITADO COM SUCESSO! PODE ADJUDICAR.");
    } else {
        println!("⚠️ Licitante com pendências. Não adjudicar ainda.");
    }
}

/// Last computed deadline, read back from the session.
pub fn print_deadline(session: &SessionState, current_time: &str) {
    println!("Horário atual do sistema: {current_time}");
    match (session.last_deadline(), session.last_message()) {
        (Some(deadline), Some(message)) => {
            println!();
            println!("  {:<28} {}", "Horário Limite (BSB)", deadline);
            println!();
            print_copy_block(message);
            println!("Copie o texto acima e cole no chat do sistema.");
        }
        _ => println!("Nenhum prazo calculado nesta sessão."),
    }
}

pub fn print_announcement(scenario: Scenario, text: &str) {
    println!("{}", scenario.label());
    println!();
    println!("Texto para Copiar:");
    print_copy_block(text);
}

pub fn print_scenarios() {
    for scenario in Scenario::ALL {
        let params = scenario.parameters();
        if params.is_empty() {
            println!("  {:<24} {}", scenario.name(), scenario.label());
        } else {
            println!(
                "  {:<24} {} [{}]",
                scenario.name(),
                scenario.label(),
                params.join(", ")
            );
        }
    }
}

// ── Helpers ──

fn print_copy_block(text: &str) {
    println!("{RULE}");
    println!("{text}");
    println!("{RULE}");
}

/// `R$ 1,234.56`, two decimals with thousands separators.
pub fn format_brl(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*d as char);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("R$ {sign}{grouped}.{frac_part}")
}
