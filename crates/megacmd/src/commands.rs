//! The MEGAcmd operations this crate supports.
//!
//! [`MegaCmd`] declares every wrapped command; [`Client`] is its one
//! implementation. Each method builds the argument vector, runs MEGAcmd
//! once, classifies the exit code and hands stdout to a decoder.

use crate::Client;
use crate::decode;
use crate::error::{Error, Result};
use crate::exit_code::ExitCode;
use crate::paths::{clean_local_path, clean_remote_path};
use crate::types::{
    CommandResult, DirectoryEntry, DiskFreeReport, DiskUsageReport, ExportEntry, ExportOutcome,
    ExportRequest, FindOptions, GetOptions, LoginMethod, LogoutOutcome,
};

const PRO_PASSWORD_WARNING: &str = "Only PRO users can protect links with passwords";
const NOT_LOGGED_IN: &str = "Not logged in";
const DOWNLOAD_FINISHED: &str = "Download finished";
const UPLOAD_FINISHED: &str = "Upload finished";
const IMPORT_MARKERS: &[&str] = &["Imported folder complete:", "Imported file complete:"];

/// Every MEGAcmd command wrapped by this crate.
pub trait MegaCmd {
    /// Contents of one or more remote files, concatenated by MEGAcmd.
    ///
    /// # Errors
    ///
    /// - `NotFound`: a path does not exist (53)
    /// - `NotAFile`: a path is a folder (51)
    fn cat(&self, remote_paths: &[&str]) -> Result<String>;

    /// Change the current remote folder. Returns false if it does not exist.
    fn cd(&self, remote_path: &str) -> Result<bool>;

    /// Account storage usage.
    fn df(&self) -> Result<DiskFreeReport>;

    /// Storage used by remote files or folders, including versions.
    fn du(&self, remote_paths: &[&str]) -> Result<DiskUsageReport>;

    /// Run any `export` sub-command.
    ///
    /// Prefer [`export_add`](Self::export_add),
    /// [`export_delete`](Self::export_delete) and
    /// [`export_list`](Self::export_list) when the action is known up front.
    fn export(&self, request: &ExportRequest) -> Result<ExportOutcome> {
        match request {
            ExportRequest::Add {
                remote_path,
                writable,
                password,
            } => self
                .export_add(remote_path, *writable, password.as_deref())
                .map(ExportOutcome::Added),
            ExportRequest::Delete { remote_path } => {
                self.export_delete(remote_path).map(ExportOutcome::Deleted)
            }
            ExportRequest::List { remote_path } => self
                .export_list(remote_path.as_deref())
                .map(ExportOutcome::Listed),
        }
    }

    /// Create a public link. Returns None if MEGAcmd refused.
    ///
    /// `writable` applies to folders only; `password` to PRO accounts only
    /// (other accounts get an unprotected link and a logged warning).
    fn export_add(
        &self,
        remote_path: &str,
        writable: bool,
        password: Option<&str>,
    ) -> Result<Option<ExportEntry>>;

    /// Remove a public link. Returns false if MEGAcmd refused.
    fn export_delete(&self, remote_path: &str) -> Result<bool>;

    /// Public links under a remote folder (current remote folder if None).
    fn export_list(&self, remote_path: Option<&str>) -> Result<Vec<ExportEntry>>;

    /// Search the remote tree.
    fn find(&self, options: &FindOptions) -> Result<Vec<DirectoryEntry>>;

    /// Download a remote file or folder.
    ///
    /// Returns false if MEGAcmd exited cleanly without reporting a finished
    /// download.
    ///
    /// # Errors
    ///
    /// - `NotFound`: remote path does not exist (53)
    /// - `LocalPath`: local path unusable (54)
    /// - `InvalidDestination`: local folder does not exist (55)
    fn get(&self, remote_path: &str, options: &GetOptions) -> Result<bool>;

    /// Import an exported link into the account.
    ///
    /// # Errors
    ///
    /// - `InvalidDestination`: remote destination is invalid (55)
    fn import(&self, link: &str, remote_path: Option<&str>, password: Option<&str>)
    -> Result<bool>;

    /// Log in. Returns false if MEGAcmd rejected the login.
    fn login(&self, method: &LoginMethod) -> Result<bool>;

    /// Log out, optionally keeping the session for a later session login.
    fn logout(&self, keep_session: bool) -> Result<LogoutOutcome>;

    /// Change the current local folder. Returns false if it is invalid.
    ///
    /// Relative paths resolve against this process's working directory,
    /// not MEGAcmd's.
    fn lcd(&self, local_path: &str) -> Result<bool>;

    /// Current local folder.
    fn lpwd(&self) -> Result<String>;

    /// Contents of a remote folder.
    fn ls(&self, remote_path: &str) -> Result<Vec<DirectoryEntry>>;

    /// Upload local files or folders.
    ///
    /// Several local paths need a remote destination, which is then
    /// treated as a folder. Returns false if MEGAcmd refused.
    fn put(&self, local_paths: &[&str], remote_path: Option<&str>) -> Result<bool>;

    /// Current remote folder.
    fn pwd(&self) -> Result<String>;

    /// Current session, or None if not logged in.
    fn session(&self) -> Result<Option<String>>;

    /// Remote tree as printed by MEGAcmd.
    fn tree(&self, remote_path: Option<&str>) -> Result<String>;

    /// MEGAcmd version text.
    fn version(&self) -> Result<String>;

    /// Email of the logged in account, or None if not logged in.
    fn whoami(&self) -> Result<Option<String>>;
}

impl Client {
    fn execute(&self, args: Vec<String>) -> Result<CommandResult> {
        self.backend.run(&args)
    }
}

/// Generic failure for exit codes without a specific meaning.
fn failed(command: &str, res: &CommandResult) -> Error {
    Error::CommandFailed {
        command: command.to_string(),
        exit_code: res.exit_code,
        stderr: res.stderr.clone(),
    }
}

fn remote_args(paths: &[&str]) -> Vec<String> {
    paths.iter().map(|p| clean_remote_path(p, false)).collect()
}

fn require_paths(command: &str, paths: &[&str]) -> Result<()> {
    if paths.is_empty() {
        return Err(Error::InvalidArguments(format!(
            "{command} needs at least one path"
        )));
    }
    Ok(())
}

impl MegaCmd for Client {
    fn cat(&self, remote_paths: &[&str]) -> Result<String> {
        require_paths("cat", remote_paths)?;
        let mut args = vec!["cat".to_string()];
        args.extend(remote_args(remote_paths));
        let res = self.execute(args)?;

        match res.exit() {
            ExitCode::Ok => Ok(res.stdout),
            ExitCode::NotFound => {
                log::error!("Remote path not found: {res:?}");
                Err(Error::NotFound {
                    target: remote_paths.join(", "),
                })
            }
            ExitCode::WrongArguments => {
                log::error!("Remote path is not a file: {res:?}");
                Err(Error::NotAFile {
                    target: remote_paths.join(", "),
                })
            }
            _ => Err(failed("cat", &res)),
        }
    }

    fn cd(&self, remote_path: &str) -> Result<bool> {
        let res = self.execute(vec!["cd".to_string(), clean_remote_path(remote_path, false)])?;

        match res.exit() {
            ExitCode::Ok => Ok(true),
            ExitCode::NotFound => {
                log::error!("Remote path not found: {res:?}");
                Ok(false)
            }
            _ => Err(failed("cd", &res)),
        }
    }

    fn df(&self) -> Result<DiskFreeReport> {
        let res = self.execute(vec!["df".to_string()])?;
        if !res.is_success() {
            return Err(failed("df", &res));
        }
        decode::decode_df(&res.stdout)
    }

    fn du(&self, remote_paths: &[&str]) -> Result<DiskUsageReport> {
        require_paths("du", remote_paths)?;
        let mut args = vec!["du".to_string(), "--versions".to_string()];
        args.extend(remote_args(remote_paths));
        let res = self.execute(args)?;
        if !res.is_success() {
            return Err(failed("du", &res));
        }
        decode::decode_du(&res.stdout)
    }

    fn export_add(
        &self,
        remote_path: &str,
        writable: bool,
        password: Option<&str>,
    ) -> Result<Option<ExportEntry>> {
        let mut args = vec![
            "export".to_string(),
            "-f".to_string(),
            "-a".to_string(),
            clean_remote_path(remote_path, false),
        ];
        if writable {
            args.push("--writable".to_string());
        }
        if let Some(password) = password {
            args.push(format!("--password={password}"));
        }
        let res = self.execute(args)?;

        if !res.is_success() {
            log::error!("Failed to add export:\n{}", res.stderr);
            return Ok(None);
        }
        if res.stderr.contains(PRO_PASSWORD_WARNING) {
            log::warn!("Password protection is a PRO feature. Export created without password.");
        }
        decode::decode_export_add(&res.stdout).map(Some)
    }

    fn export_delete(&self, remote_path: &str) -> Result<bool> {
        let res = self.execute(vec![
            "export".to_string(),
            "-d".to_string(),
            clean_remote_path(remote_path, false),
        ])?;
        if !res.is_success() {
            log::error!("Failed to delete export:\n{}", res.stderr);
            return Ok(false);
        }
        Ok(true)
    }

    fn export_list(&self, remote_path: Option<&str>) -> Result<Vec<ExportEntry>> {
        let mut args = vec!["export".to_string()];
        args.extend(remote_path.map(|p| clean_remote_path(p, false)));
        let res = self.execute(args)?;
        if !res.is_success() {
            log::error!("Failed to list exports:\n{}", res.stderr);
            return Ok(Vec::new());
        }
        decode::decode_export_list(&res.stdout)
    }

    fn find(&self, options: &FindOptions) -> Result<Vec<DirectoryEntry>> {
        let mut args = vec![
            "find".to_string(),
            "-l".to_string(),
            "--show-handles".to_string(),
        ];
        args.extend(options.mtime.as_ref().map(|t| format!("--mtime={t}")));
        args.extend(options.size.as_ref().map(|s| format!("--size={s}")));
        args.extend(
            options
                .remote_path
                .as_deref()
                .map(|p| clean_remote_path(p, false)),
        );
        args.extend(options.pattern.as_ref().map(|p| format!("--pattern={p}")));
        let res = self.execute(args)?;
        if !res.is_success() {
            return Err(failed("find", &res));
        }
        decode::decode_find(&res.stdout)
    }

    fn get(&self, remote_path: &str, options: &GetOptions) -> Result<bool> {
        let mut args = vec!["get".to_string()];
        if options.merge {
            args.push("-m".to_string());
        }
        args.extend(options.password.as_ref().map(|p| format!("--password={p}")));
        args.push(clean_remote_path(remote_path, false));
        args.extend(
            options
                .local_path
                .as_deref()
                .map(|p| clean_local_path(p, false)),
        );
        let res = self.execute(args)?;

        match res.exit() {
            ExitCode::Ok => Ok(res.stdout.contains(DOWNLOAD_FINISHED)),
            ExitCode::NotFound => {
                log::error!("Remote path not found: {res:?}");
                Err(Error::NotFound {
                    target: remote_path.to_string(),
                })
            }
            ExitCode::InvalidState => {
                log::error!("Local path error: {res:?}");
                Err(Error::LocalPath {
                    target: options.local_path.clone().unwrap_or_default(),
                    stderr: res.stderr,
                })
            }
            ExitCode::InvalidType => {
                log::error!("Invalid download folder (local folder does not exist): {res:?}");
                Err(Error::InvalidDestination {
                    target: options.local_path.clone().unwrap_or_default(),
                    stderr: res.stderr,
                })
            }
            _ => {
                log::error!("Failed to get file/folder: {res:?}");
                Err(failed("get", &res))
            }
        }
    }

    fn import(
        &self,
        link: &str,
        remote_path: Option<&str>,
        password: Option<&str>,
    ) -> Result<bool> {
        let mut args = vec!["import".to_string(), link.to_string()];
        args.extend(password.map(|p| format!("--password={p}")));
        args.extend(remote_path.map(|p| clean_remote_path(p, false)));
        let res = self.execute(args)?;

        match res.exit() {
            ExitCode::Ok => {
                if IMPORT_MARKERS.iter().any(|m| res.stdout.contains(m)) {
                    Ok(true)
                } else {
                    Err(Error::unexpected("import", res.stdout))
                }
            }
            ExitCode::InvalidType => {
                log::error!("Invalid remote path (invalid destination): {res:?}");
                Err(Error::InvalidDestination {
                    target: remote_path.unwrap_or_default().to_string(),
                    stderr: res.stderr,
                })
            }
            _ => Err(failed("import", &res)),
        }
    }

    fn login(&self, method: &LoginMethod) -> Result<bool> {
        let args = match method {
            LoginMethod::Credentials {
                email,
                password,
                auth_code,
            } => {
                if email.is_empty() || password.is_empty() {
                    return Err(Error::InvalidArguments(
                        "email and password are required for user login".to_string(),
                    ));
                }
                let mut args = vec!["login".to_string(), email.clone(), password.clone()];
                args.extend(
                    auth_code
                        .as_ref()
                        .filter(|c| !c.is_empty())
                        .map(|c| format!("--auth-code={c}")),
                );
                args
            }
            LoginMethod::Session(session) => {
                if session.is_empty() {
                    return Err(Error::InvalidArguments(
                        "session is required for session login".to_string(),
                    ));
                }
                vec!["login".to_string(), session.clone()]
            }
        };

        let res = self.execute(args)?;
        Ok(res.is_success())
    }

    fn logout(&self, keep_session: bool) -> Result<LogoutOutcome> {
        let mut args = vec!["logout".to_string()];
        if keep_session {
            args.push("--keep-session".to_string());
        }
        let res = self.execute(args)?;

        if !res.is_success() {
            return Ok(LogoutOutcome::default());
        }
        let session = if keep_session {
            decode::decode_logout_session(&res.stdout)
        } else {
            None
        };
        Ok(LogoutOutcome {
            success: true,
            session,
        })
    }

    fn lcd(&self, local_path: &str) -> Result<bool> {
        let res = self.execute(vec!["lcd".to_string(), clean_local_path(local_path, false)])?;

        match res.exit() {
            ExitCode::Ok => Ok(true),
            ExitCode::InvalidType => {
                log::error!("Local path error: {res:?}");
                Ok(false)
            }
            _ => Err(failed("lcd", &res)),
        }
    }

    fn lpwd(&self) -> Result<String> {
        Ok(self.execute(vec!["lpwd".to_string()])?.stdout)
    }

    fn ls(&self, remote_path: &str) -> Result<Vec<DirectoryEntry>> {
        let res = self.execute(vec![
            "ls".to_string(),
            "-hal".to_string(),
            "--show-handles".to_string(),
            clean_remote_path(remote_path, false),
        ])?;
        if !res.is_success() {
            return Err(failed("ls", &res));
        }
        decode::decode_ls(&res.stdout)
    }

    fn put(&self, local_paths: &[&str], remote_path: Option<&str>) -> Result<bool> {
        require_paths("put", local_paths)?;
        let many = local_paths.len() > 1;
        if many && remote_path.is_none() {
            return Err(Error::InvalidArguments(
                "a remote path is required when uploading multiple local items".to_string(),
            ));
        }

        let mut args = vec!["put".to_string(), "-c".to_string()];
        args.extend(local_paths.iter().map(|p| clean_local_path(p, false)));
        args.extend(remote_path.map(|p| clean_remote_path(p, many)));
        let res = self.execute(args)?;

        if !res.is_success() {
            log::error!("Failed to put file/folder:\n{}", res.stderr);
            return Ok(false);
        }
        if res.stdout.contains(UPLOAD_FINISHED) {
            return Ok(true);
        }
        Err(Error::unexpected("put", res.stdout))
    }

    fn pwd(&self) -> Result<String> {
        let res = self.execute(vec!["pwd".to_string()])?;
        if !res.is_success() {
            return Err(failed("pwd", &res));
        }
        Ok(res.stdout)
    }

    fn session(&self) -> Result<Option<String>> {
        let res = self.execute(vec!["session".to_string()])?;

        if res.is_success() {
            if let Some(session) = decode::decode_session(&res.stdout) {
                return Ok(Some(session));
            }
        } else if res.stderr.contains(NOT_LOGGED_IN) {
            return Ok(None);
        }
        Err(Error::unexpected("session", res.stdout))
    }

    fn tree(&self, remote_path: Option<&str>) -> Result<String> {
        let mut args = vec!["tree".to_string()];
        args.extend(remote_path.map(|p| clean_remote_path(p, false)));
        let res = self.execute(args)?;
        if !res.is_success() {
            return Err(failed("tree", &res));
        }
        Ok(res.stdout)
    }

    fn version(&self) -> Result<String> {
        Ok(self.execute(vec!["version".to_string()])?.stdout)
    }

    fn whoami(&self) -> Result<Option<String>> {
        let res = self.execute(vec!["whoami".to_string()])?;

        // Not logged in or error
        if !res.is_success() {
            return Ok(None);
        }
        decode::decode_whoami(&res.stdout)
            .map(Some)
            .ok_or_else(|| Error::unexpected("whoami", res.stdout))
    }
}
