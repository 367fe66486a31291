//! End-to-end tests for the dalil binary.

use assert_cmd::Command;
use predicates::prelude::*;

const DECREE: &str = "Décret exécutif n° 12-34 du 3 mars 2012 portant organisation \
des services de l'administration centrale.\n\
Vu la Constitution, notamment ses articles 99 et 143 ;\n\
Article premier : Le présent décret a pour objet de fixer l'organisation \
des services de l'administration centrale du ministère.\n\
Le présent décret sera publié au Journal officiel de la République.";

fn dalil() -> Command {
    Command::cargo_bin("dalil").unwrap()
}

#[test]
fn import_decree_to_stdout_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("decree.txt");
    std::fs::write(&input, DECREE).unwrap();

    dalil()
        .arg("import")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type_texte\": \"Décret\""))
        .stdout(predicate::str::contains("\"numero_texte\": \"12-34\""))
        .stdout(predicate::str::contains("\"statut\": \"Publié\""));
}

#[test]
fn import_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("decree.txt");
    let output = dir.path().join("draft.json");
    std::fs::write(&input, DECREE).unwrap();

    dalil()
        .arg("import")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("date_promulgation"));
    assert!(written.contains("2012-03-03"));
}

#[test]
fn import_text_format_shows_kind() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("decree.txt");
    std::fs::write(&input, DECREE).unwrap();

    dalil()
        .arg("import")
        .arg(&input)
        .arg("--format")
        .arg("text")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kind: ExecutiveDecree"));
}

#[test]
fn import_reads_stdin() {
    dalil()
        .arg("import")
        .arg("-")
        .write_stdin(DECREE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type_texte\": \"Décret\""));
}

#[test]
fn import_missing_file_fails() {
    dalil()
        .arg("import")
        .arg("/no/such/file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn import_title_flag_feeds_classification() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plain.txt");
    std::fs::write(&input, "Texte sans mot-clé reconnu.").unwrap();

    dalil()
        .arg("import")
        .arg(&input)
        .arg("--title")
        .arg("Arrêté interministériel du 5 juin 2019")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type_texte\": \"Arrêté\""));
}

#[test]
fn import_store_submits_draft() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("decree.txt");
    let store = dir.path().join("store.json");
    std::fs::write(&input, DECREE).unwrap();

    dalil()
        .arg("import")
        .arg(&input)
        .arg("--store")
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft submitted"));

    assert!(store.exists());
}

#[test]
fn batch_processes_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    std::fs::write(dir.path().join("a.txt"), DECREE).unwrap();
    std::fs::write(dir.path().join("b.txt"), "Loi n° 90-11 relative aux relations de travail.").unwrap();

    dalil()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .arg("--output-dir")
        .arg(&out)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 successful"));

    assert!(out.join("a.json").exists());
    assert!(out.join("b.json").exists());
    assert!(out.join("summary.csv").exists());
}

#[test]
fn batch_no_match_fails() {
    let dir = tempfile::tempdir().unwrap();

    dalil()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn templates_lists_all_kinds() {
    dalil()
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loi"))
        .stdout(predicate::str::contains("Décret"))
        .stdout(predicate::str::contains("Circulaire"));
}

#[test]
fn templates_single_kind_json() {
    dalil()
        .arg("templates")
        .arg("--kind")
        .arg("loi")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"law\""))
        .stdout(predicate::str::contains("\"numero_texte\""));
}

#[test]
fn config_set_then_get_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    dalil()
        .arg("--config")
        .arg(&path)
        .args(["config", "set", "import.article_max", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("import.article_max = 250"));

    dalil()
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "import.article_max"])
        .assert()
        .success()
        .stdout(predicate::str::contains("250"));

    // Untouched settings keep their defaults in the written file.
    dalil()
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "import.recital_min"])
        .assert()
        .success()
        .stdout(predicate::str::contains("50"));
}

#[test]
fn config_set_rejects_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    dalil()
        .arg("--config")
        .arg(&path)
        .args(["config", "set", "import.article_window_max", "250"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting"));

    assert!(!path.exists());
}

#[test]
fn config_set_rejects_non_numeric_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    dalil()
        .arg("--config")
        .arg(&path)
        .args(["config", "set", "import.article_max", "wide"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expects a number"));

    assert!(!path.exists());
}

#[test]
fn config_set_rejects_empty_window() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    dalil()
        .arg("--config")
        .arg(&path)
        .args(["config", "set", "import.article_min", "500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("article window is empty"));

    assert!(!path.exists());
}

#[test]
fn templates_unknown_kind_fails() {
    dalil()
        .arg("templates")
        .arg("--kind")
        .arg("edit")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown legal-text kind"));
}
