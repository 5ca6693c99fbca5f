use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_alert_shows_single_acknowledgement() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("tutorly")
        .env("TUTORLY_HOME", dir.path())
        .args([
            "alert",
            "Login Bem-Sucedido!",
            "Bem-vindo, Ana!",
            "--kind",
            "success",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Login Bem-Sucedido!"))
        .stdout(predicate::str::contains("Bem-vindo, Ana!"))
        .stdout(predicate::str::contains("[ OK ]"))
        .stdout(predicate::str::contains("Cancelar").not());
}

#[test]
fn test_alert_unknown_kind_still_renders() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("tutorly")
        .env("TUTORLY_HOME", dir.path())
        .args(["alert", "Aviso", "Algo aconteceu.", "--kind", "warning"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aviso"))
        .stdout(predicate::str::contains("[ OK ]"));
}

#[test]
fn test_confirm_shows_both_controls() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("tutorly")
        .env("TUTORLY_HOME", dir.path())
        .args(["confirm", "Cancelar Agendamento", "Tem certeza?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelar Agendamento"))
        .stdout(predicate::str::contains("[ Confirmar ]"))
        .stdout(predicate::str::contains("[ Cancelar ]"))
        .stdout(predicate::str::contains("[ OK ]").not());
}

#[test]
fn test_confirm_uses_configured_labels() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[dialog]\naffirmative_label = \"Sim\"\nnegative_label = \"Não\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("tutorly")
        .env("TUTORLY_HOME", dir.path())
        .args(["confirm", "Aprovar Professor", "Deseja aprovar?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ Sim ]"))
        .stdout(predicate::str::contains("[ Não ]"));
}

#[test]
fn test_malformed_config_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[dialog\n").unwrap();

    cargo_bin_cmd!("tutorly")
        .env("TUTORLY_HOME", dir.path())
        .args(["alert", "Aviso", "Teste"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("load config"));
}
