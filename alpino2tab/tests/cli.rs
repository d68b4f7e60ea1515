use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

static JAN_LOOPT: &str = "<sentence>
1\tJan\tJan\tname\t2\tsu\t_\t_
2\tloopt\tloop\tverb\t0\tROOT\t_\t_
3\tnaar\tnaar\tprep\t2\tmod\t_\t_
4\thuis\thuis\tnoun\t3\tobj1\t_\t_
5\t.\t.\tpunct\t4\tpunct\t_\t_
</sentence>
";

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("alpino")
        .join("testdata")
        .join(name)
}

#[test]
fn converts_tree_to_table() {
    let mut cmd = cargo_bin_cmd!("alpino2tab");
    cmd.arg(fixture_path("jan-loopt.xml"));

    cmd.assert().success().stdout(JAN_LOOPT);
}

#[test]
fn second_head_daughter_keeps_its_relation() {
    let mut cmd = cargo_bin_cmd!("alpino2tab");
    cmd.arg(fixture_path("jan-loopt-hd.xml"));

    cmd.assert()
        .success()
        .stdout(JAN_LOOPT.replace("3\tobj1", "3\thd"));
}

#[test]
fn maps_flags_to_options() {
    let mut cmd = cargo_bin_cmd!("alpino2tab");
    cmd.args(["-c", "-r", "-w", "-p"])
        .arg(fixture_path("new-york.xml"));

    cmd.assert().success().stdout(
        "<sentence>
New\tname\t3\tsu
York\tname\t1\tmwp
is\tverb\t0\tROOT
big\tadj\t3\tpredc
</sentence>
",
    );
}

#[test]
fn concatenates_multi_word_units_by_default() {
    let mut cmd = cargo_bin_cmd!("alpino2tab");
    cmd.arg("--mark-mwu-alpino").arg(fixture_path("new-york.xml"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "1\t[_@mwu_New_York_]\tNew_York\tmwu\t2\tsu\t_\t_\n",
        ));
}

#[test]
fn skips_trees_that_cannot_be_converted() {
    let mut cmd = cargo_bin_cmd!("alpino2tab");
    cmd.arg(fixture_path("negative-head.xml"))
        .arg(fixture_path("missing.xml"))
        .arg(fixture_path("jan-loopt.xml"));

    cmd.assert()
        .success()
        .stdout(JAN_LOOPT)
        .stderr(
            predicate::str::contains("negative-head.xml")
                .and(predicate::str::contains("missing.xml")),
        );
}

#[test]
fn fails_when_no_tree_is_converted() {
    let mut cmd = cargo_bin_cmd!("alpino2tab");
    cmd.arg(fixture_path("negative-head.xml"));

    cmd.assert().failure().stdout("");
}

#[test]
fn reads_tree_from_stdin() {
    let xml = fs::read_to_string(fixture_path("jan-loopt.xml")).unwrap();

    let mut cmd = cargo_bin_cmd!("alpino2tab");
    cmd.arg("-").write_stdin(xml);

    cmd.assert().success().stdout(JAN_LOOPT);
}

#[test]
fn writes_tables_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.tab");

    let mut cmd = cargo_bin_cmd!("alpino2tab");
    cmd.arg("--output")
        .arg(&output)
        .arg(fixture_path("du.xml"))
        .arg(fixture_path("trace.xml"));
    cmd.assert().success().stdout("");

    let tables = fs::read_to_string(&output).unwrap();
    assert_eq!(tables.matches("<sentence>\n").count(), 2);
    assert!(tables.contains("1\tKortom\tkortom\tadv\t0\tROOT\t_\t_\n"));
    assert!(tables.contains("3\tslapen\tslaap\tverb\t2\tvc\t_\t_\n"));
}

#[test]
fn unescapes_terminator() {
    let mut cmd = cargo_bin_cmd!("alpino2tab");
    cmd.args(["-t", "\\n"]).arg(fixture_path("jan-loopt.xml"));

    cmd.assert()
        .success()
        .stdout(predicate::str::ends_with("\t_\t_\n\n</sentence>\n"));
}

#[test]
fn rejects_unknown_encoding() {
    let mut cmd = cargo_bin_cmd!("alpino2tab");
    cmd.args(["-e", "klingon"]).arg(fixture_path("jan-loopt.xml"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown encoding"));
}

#[test]
fn encodes_output_as_latin1() {
    let mut cmd = cargo_bin_cmd!("alpino2tab");
    cmd.args(["-e", "latin-1"]).arg(fixture_path("jan-loopt.xml"));

    cmd.assert().success().stdout(JAN_LOOPT);
}

#[test]
fn skips_sentences_that_cannot_be_encoded() {
    let dir = tempfile::tempdir().unwrap();
    let euro = dir.path().join("euro.xml");
    let xml = fs::read_to_string(fixture_path("jan-loopt.xml")).unwrap();
    fs::write(&euro, xml.replace("huis", "€uro")).unwrap();

    let mut cmd = cargo_bin_cmd!("alpino2tab");
    cmd.args(["-e", "latin-1"])
        .arg(&euro)
        .arg(fixture_path("jan-loopt.xml"));
    cmd.assert()
        .success()
        .stdout(JAN_LOOPT)
        .stderr(predicate::str::contains("euro.xml").and(predicate::str::contains("cannot be encoded")));

    let mut cmd = cargo_bin_cmd!("alpino2tab");
    cmd.args(["-e", "latin-1"]).arg(&euro);
    cmd.assert().failure().stdout("");
}

#[test]
fn requires_input_files() {
    let mut cmd = cargo_bin_cmd!("alpino2tab");
    cmd.assert().failure();
}
