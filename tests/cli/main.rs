use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod init;

const BIN_NAME: &str = "gologfix";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops the config lookup from leaving the project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_file(path: &str, content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(path, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn fix_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("fix");
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub const SERVICE_GO: &str = r#"package service

func (s *Service) Save(fileID string, data []byte) error {
	s.logger.Info("saving file", map[string]interface{}{
		"fileID": fileID,
		"size":   len(data),
	})
	if err := s.store.Put(fileID, data); err != nil {
		s.logger.Error("save failed", map[string]interface{}{ "fileID": fileID, "retry": false })
		return err
	}
	s.logger.Debug("saved", nil)
	return nil
}
"#;

pub const SERVICE_GO_FIXED: &str = r#"package service

func (s *Service) Save(fileID string, data []byte) error {
	s.logger.Info("saving file, fileID: %s, size: %d", fileID, len(data))
	if err := s.store.Put(fileID, data); err != nil {
		s.logger.Error("save failed, fileID: %s, retry: %t", fileID, false)
		return err
	}
	s.logger.Debug("saved", nil)
	return nil
}
"#;

pub const PLAIN_GO: &str = r#"package service

func (s *Service) Close() {
	s.logger.Info("closing")
}
"#;
