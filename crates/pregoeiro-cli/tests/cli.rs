use std::io::Write;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("pregoeiro");
    cmd.env_remove("PREGOEIRO_CONFIG");
    cmd
}

fn json_stdout(args: &[&str]) -> Value {
    let output = cmd().arg("--json").args(args).output().unwrap();
    assert!(output.status.success(), "{args:?} failed");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn info_shows_tender() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(contains("PE 90019/2025"))
        .stdout(contains("R$ 3,295,260.58"))
        .stdout(contains("R$ 329,526.06"));
}

#[test]
fn eligible_bidder() {
    cmd()
        .args(["eligibility", "--lg", "1.5", "--lc", "1.2", "--sg", "2.0", "--all-technical"])
        .assert()
        .success()
        .stdout(contains("HABILITADO financeiramente"))
        .stdout(contains("Qualificação Técnica APROVADA"))
        .stdout(contains("PODE ADJUDICAR"));
}

#[test]
fn net_worth_fallback() {
    cmd()
        .args([
            "eligibility",
            "--lg",
            "0.8",
            "--lc",
            "1.2",
            "--sg",
            "1.1",
            "--net-worth",
            "500000",
            "--all-technical",
        ])
        .assert()
        .success()
        .stdout(contains("Verificando Patrimônio Líquido"))
        .stdout(contains("PL (R$ 500,000.00) supera o mínimo"))
        .stdout(contains("PODE ADJUDICAR"));
}

#[test]
fn unset_figures_fail_and_are_flagged() {
    cmd()
        .args(["eligibility", "--all-technical"])
        .assert()
        .success()
        .stdout(contains("PL insuficiente"))
        .stdout(contains("Índices não informados (lg, lc, sg)"))
        .stdout(contains("Não adjudicar ainda"));
}

#[test]
fn missing_attestation_blocks_award() {
    cmd()
        .args([
            "eligibility",
            "--lg",
            "2",
            "--lc",
            "2",
            "--sg",
            "2",
            "--bank-assets",
            "--scope-ifrs9",
            "--scope-credit-risk",
            "--ifrs9-specialist",
            "--accounting-consultant",
            "--tax-consultant",
            "--risk-consultant",
        ])
        .assert()
        .success()
        .stdout(contains("[ ] Especialista Modelagem (5 anos)"))
        .stdout(contains("Pendências na Qualificação Técnica (1 de 8)"))
        .stdout(contains("Não adjudicar ainda"));
}

#[test]
fn eligibility_json_verdict() {
    let verdict = json_stdout(&["eligibility", "--lg", "1.0", "--lc", "2", "--sg", "2"]);
    assert_eq!(verdict["financial_pass"], false);
    assert_eq!(verdict["technical_pass"], false);
    assert_eq!(verdict["overall_pass"], false);
    assert_eq!(verdict["financial"]["net_worth_checked"], true);
    assert_eq!(verdict["missing_attestations"].as_array().unwrap().len(), 8);
}

#[test]
fn proposal_deadline_is_two_hours() {
    cmd()
        .args(["--now", "2025-11-03T09:15:00-03:00", "deadline", "proposal"])
        .assert()
        .success()
        .stdout(contains("Horário Limite (BSB)"))
        .stdout(contains(
            "O prazo de 120 minutos encerra-se às 11:15 (Horário de Brasília).",
        ))
        .stdout(contains("Horário atual do sistema: 09:15:00"));
}

#[test]
fn appeal_deadline_default_and_clamp() {
    cmd()
        .args(["--now", "2025-11-03T14:50:00-03:00", "deadline", "appeal"])
        .assert()
        .success()
        .stdout(contains("encerra-se às 15:10"));

    cmd()
        .args(["--now", "2025-11-03T14:50:00-03:00", "deadline", "appeal", "--minutes", "90"])
        .assert()
        .success()
        .stdout(contains("O prazo de 60 minutos encerra-se às 15:50"));
}

#[test]
fn utc_instant_is_shown_in_brasilia_time() {
    let result = json_stdout(&["--now", "2025-11-03T12:00:00Z", "deadline", "custom"]);
    assert_eq!(result["duration_minutes"], 30);
    assert_eq!(result["display_time"], "09:30");
}

#[test]
fn deadline_with_system_clock() {
    cmd()
        .args(["deadline", "custom", "--minutes", "5"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"encerra-se às \d{2}:\d{2} \(Horário de Brasília\)").unwrap());
}

#[test]
fn announce_unviable_price() {
    cmd()
        .args(["announce", "unviable-price"])
        .assert()
        .success()
        .stdout(contains("inferior a 30% da média dos lances ofertados"))
        .stdout(contains("item 10.2.4.4 do Edital"));
}

#[test]
fn announce_deny_appeal_with_reason() {
    let result = json_stdout(&["announce", "deny-appeal", "--reason", "mera insatisfação"]);
    assert_eq!(result["scenario"], "deny-appeal");
    assert!(
        result["text"]
            .as_str()
            .unwrap()
            .contains("tratando-se apenas de mera insatisfação.")
    );
}

#[test]
fn announce_unknown_scenario_fails() {
    cmd()
        .args(["announce", "reopen-session"])
        .assert()
        .failure()
        .stderr(contains("unknown announcement scenario"));
}

#[test]
fn scenarios_listed() {
    cmd()
        .arg("scenarios")
        .assert()
        .success()
        .stdout(contains("suspension-for-review"))
        .stdout(contains("deny-appeal"))
        .stdout(contains("[denial_reason]"));
}

#[test]
fn config_file_overrides_citations() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "tender_id": "PE 1/2026", "citations": {{ "appeal_item": "16.2" }} }}"#
    )
    .unwrap();

    cmd()
        .arg("--config")
        .arg(file.path())
        .args(["announce", "appeal-window", "--minutes", "15"])
        .assert()
        .success()
        .stdout(contains("o prazo de 15 minutos"))
        .stdout(contains("Item 16.2 do Edital"));

    cmd()
        .env("PREGOEIRO_CONFIG", file.path())
        .arg("info")
        .assert()
        .success()
        .stdout(contains("PE 1/2026"));
}

#[test]
fn missing_config_file_fails() {
    cmd()
        .args(["--config", "/nonexistent/tender.json", "info"])
        .assert()
        .failure()
        .stderr(contains("config file not found"));
}

#[test]
fn session_keeps_last_deadline() {
    cmd()
        .args(["--now", "2025-11-03T14:50:00-03:00", "session"])
        .write_stdin(
            "show\n\
             deadline appeal\n\
             show\n\
             announce deny-appeal --reason \"sem vício apontado\"\n\
             bogus\n\
             deadline proposal\n\
             show\n\
             quit\n\
             deadline custom\n",
        )
        .assert()
        .success()
        .stdout(contains("Nenhum prazo calculado nesta sessão."))
        .stdout(contains("O prazo de 20 minutos encerra-se às 15:10"))
        .stdout(contains("tratando-se apenas de sem vício apontado."))
        .stdout(contains("O prazo de 120 minutos encerra-se às 16:50"))
        .stdout(contains("O prazo de 30 minutos").not())
        .stderr(contains("bogus"));
}
