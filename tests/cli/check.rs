use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, PLAIN_GO, SERVICE_GO, SERVICE_GO_FIXED};

#[test]
fn test_check_previews_without_writing() -> Result<()> {
    let test = CliTest::with_file("service.go", SERVICE_GO)?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    warning: structured Info call can use a format string
      --> service.go:4
       - s.logger.Info("saving file", map[string]interface{}{
       - 		"fileID": fileID,
       - 		"size":   len(data),
       - 	})
       + s.logger.Info("saving file, fileID: %s, size: %d", fileID, len(data))

    warning: structured Error call can use a format string
      --> service.go:9
       - s.logger.Error("save failed", map[string]interface{}{ "fileID": fileID, "retry": false })
       + s.logger.Error("save failed, fileID: %s, retry: %t", fileID, false)

    ✘ 2 calls in 1 file would be rewritten. Run gologfix fix to apply.

    ----- stderr -----
    "#);

    assert_eq!(test.read_file("service.go")?, SERVICE_GO);
    Ok(())
}

#[test]
fn test_check_clean_project_succeeds() -> Result<()> {
    let test = CliTest::with_file("service.go", SERVICE_GO_FIXED)?;
    test.write_file("close.go", PLAIN_GO)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Scanned 2 source files - nothing to rewrite

    ----- stderr -----
    ");
    Ok(())
}

#[test]
fn test_check_glob_argument() -> Result<()> {
    let test = CliTest::with_file("a/service.go", SERVICE_GO)?;
    test.write_file("b/service.go", PLAIN_GO)?;

    let mut cmd = test.check_command();
    cmd.args(["a/*.go", "-v"]);
    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    would fix: a/service.go (2 calls)
    warning: structured Info call can use a format string
      --> a/service.go:4
       - s.logger.Info("saving file", map[string]interface{}{
       - 		"fileID": fileID,
       - 		"size":   len(data),
       - 	})
       + s.logger.Info("saving file, fileID: %s, size: %d", fileID, len(data))

    warning: structured Error call can use a format string
      --> a/service.go:9
       - s.logger.Error("save failed", map[string]interface{}{ "fileID": fileID, "retry": false })
       + s.logger.Error("save failed, fileID: %s, retry: %t", fileID, false)

    ✘ 2 calls in 1 file would be rewritten. Run gologfix fix to apply.

    ----- stderr -----
    note: no .gologfixrc.json found, using defaults
    "#);
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    assert_cmd_snapshot!(cmd, @r"
    success: true
    exit_code: 0
    ----- stdout -----
    A fast CLI tool for rewriting structured Go logger calls into format-string calls

    Usage: gologfix [COMMAND]

    Commands:
      fix    Rewrite structured logger calls into format-string calls
      check  Report logger calls that would be rewritten (dry-run, exits 1 if any)
      init   Initialize a new .gologfixrc.json configuration file
      help   Print this message or the help of the given subcommand(s)

    Options:
      -h, --help     Print help
      -V, --version  Print version

    ----- stderr -----
    ");
    Ok(())
}
