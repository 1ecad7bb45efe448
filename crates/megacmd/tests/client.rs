//! Client tests against a scripted backend.
//!
//! Each test queues what MEGAcmd would print and checks both the argument
//! vector the client built and how it classified the result.

use megacmd::backend::MockBackend;
use megacmd::{
    Client, CommandResult, Error, ExportOutcome, ExportRequest, FindOptions, GetOptions,
    LoginMethod, MegaCmd,
};

fn client_with(replies: &[(&str, &str, i32)]) -> (Client, MockBackend) {
    let mock = MockBackend::new();
    for (stdout, stderr, code) in replies {
        mock.push(CommandResult::new(*stdout, *stderr, *code));
    }
    (Client::with_backend(Box::new(mock.clone())), mock)
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

fn last_call(mock: &MockBackend) -> Vec<String> {
    mock.calls().pop().expect("no command was run")
}

// ============================================================================
// cat
// ============================================================================

#[test]
fn test_cat_returns_stdout() {
    let (client, mock) = client_with(&[("hello\nworld\n", "", 0)]);
    assert_eq!(client.cat(&["./notes.txt", "/b.txt"]).unwrap(), "hello\nworld");
    assert_eq!(last_call(&mock), args(&["cat", "notes.txt", "/b.txt"]));
}

#[test]
fn test_cat_not_found() {
    let (client, _) = client_with(&[("", "[API:err] Couldn't find /x", 53)]);
    let err = client.cat(&["/x"]).unwrap_err();
    assert!(matches!(err, Error::NotFound { ref target } if target == "/x"));
    assert!(err.is_not_found());
}

#[test]
fn test_cat_folder_is_not_a_file() {
    let (client, _) = client_with(&[("", "not a file", 51)]);
    assert!(matches!(
        client.cat(&["/Documents"]).unwrap_err(),
        Error::NotAFile { .. }
    ));
}

#[test]
fn test_cat_other_failure() {
    let (client, _) = client_with(&[("", "Not logged in", 57)]);
    assert!(matches!(
        client.cat(&["/a"]).unwrap_err(),
        Error::CommandFailed { exit_code: 57, .. }
    ));
}

#[test]
fn test_cat_requires_paths() {
    let (client, mock) = client_with(&[]);
    assert!(matches!(
        client.cat(&[]).unwrap_err(),
        Error::InvalidArguments(_)
    ));
    assert!(mock.calls().is_empty());
}

// ============================================================================
// navigation
// ============================================================================

#[test]
fn test_cd() {
    let (client, mock) = client_with(&[("", "", 0), ("", "Couldn't find", 53)]);
    assert!(client.cd("/Documents/").unwrap());
    assert!(!client.cd("/missing").unwrap());
    assert_eq!(
        mock.calls(),
        vec![args(&["cd", "/Documents/"]), args(&["cd", "/missing"])]
    );
}

#[test]
fn test_cd_other_failure_is_error() {
    let (client, _) = client_with(&[("", "", 57)]);
    assert!(client.cd("/").is_err());
}

#[test]
fn test_lcd() {
    let (client, mock) = client_with(&[("", "", 0), ("", "Not a valid folder", 55)]);
    assert!(client.lcd("/tmp/").unwrap());
    assert!(!client.lcd("/nope").unwrap());
    assert_eq!(mock.calls()[0], args(&["lcd", "/tmp"]));
}

#[test]
fn test_pwd_and_lpwd() {
    let (client, mock) = client_with(&[("/Documents\n", "", 0), ("/home/me\n", "", 0)]);
    assert_eq!(client.pwd().unwrap(), "/Documents");
    assert_eq!(client.lpwd().unwrap(), "/home/me");
    assert_eq!(mock.calls(), vec![args(&["pwd"]), args(&["lpwd"])]);
}

#[test]
fn test_pwd_failure() {
    let (client, _) = client_with(&[("", "Not logged in", 57)]);
    assert!(matches!(
        client.pwd().unwrap_err(),
        Error::CommandFailed { ref command, .. } if command == "pwd"
    ));
}

#[test]
fn test_lpwd_ignores_exit_code() {
    let (client, _) = client_with(&[("/home/me", "warning", 59)]);
    assert_eq!(client.lpwd().unwrap(), "/home/me");
}

// ============================================================================
// listing
// ============================================================================

#[test]
fn test_ls() {
    let out = "\
FLAGS VERS      SIZE DATE               HANDLE     NAME
d---    -            - 07Jan2024 13:45:10 H:AbCdEfGh Documents
----    1      1.00 KB 01Feb2024 10:00:00 H:Ab12Cd34 notes.txt";
    let (client, mock) = client_with(&[(out, "", 0)]);

    let entries = client.ls("./").unwrap();
    assert_eq!(
        last_call(&mock),
        args(&["ls", "-hal", "--show-handles", ""])
    );
    assert_eq!(entries.len(), 2);
    assert!(entries[0].is_directory);
    assert_eq!(entries[0].name, "Documents");
    assert_eq!(entries[1].size.as_deref(), Some("1.00 KB"));
}

#[test]
fn test_ls_failure() {
    let (client, _) = client_with(&[("", "Couldn't find", 53)]);
    assert!(matches!(
        client.ls("/missing").unwrap_err(),
        Error::CommandFailed { exit_code: 53, .. }
    ));
}

#[test]
fn test_find_arguments() {
    let out = "/Documents <H:AbCdEfGh> (folder)\n/Documents/a.txt <H:Ab12Cd34> (12.00 KB)";
    let (client, mock) = client_with(&[(out, "", 0)]);

    let entries = client
        .find(&FindOptions {
            remote_path: Some("/Documents".to_string()),
            pattern: Some("*.txt".to_string()),
            mtime: Some("-1d".to_string()),
            size: Some("+1k".to_string()),
        })
        .unwrap();

    assert_eq!(
        last_call(&mock),
        args(&[
            "find",
            "-l",
            "--show-handles",
            "--mtime=-1d",
            "--size=+1k",
            "/Documents",
            "--pattern=*.txt",
        ])
    );
    assert_eq!(entries.len(), 2);
    assert!(entries[0].is_directory);
    assert!(!entries[1].is_directory);
}

#[test]
fn test_find_without_options() {
    let (client, mock) = client_with(&[("", "", 0)]);
    assert!(client.find(&FindOptions::default()).unwrap().is_empty());
    assert_eq!(last_call(&mock), args(&["find", "-l", "--show-handles"]));
}

#[test]
fn test_tree() {
    let (client, mock) = client_with(&[("root\n├── a\n└── b\n", "", 0)]);
    assert_eq!(client.tree(Some("/x")).unwrap(), "root\n├── a\n└── b");
    assert_eq!(last_call(&mock), args(&["tree", "/x"]));
}

// ============================================================================
// storage
// ============================================================================

#[test]
fn test_df() {
    let (client, mock) = client_with(&[("USED STORAGE: 1000 50.0% of 2000", "", 0)]);
    let report = client.df().unwrap();
    assert_eq!(report.total_used_storage, 1000);
    assert_eq!(report.total_storage, 2000);
    assert_eq!(last_call(&mock), args(&["df"]));
}

#[test]
fn test_df_failure() {
    let (client, _) = client_with(&[("", "Not logged in", 57)]);
    assert!(client.df().is_err());
}

#[test]
fn test_du() {
    let out = "\
FILENAME                  SIZE  SIZE WITH VERSION
Documents:               20480       24576
----------------------------------------------
Total storage used:      20480       24576";
    let (client, mock) = client_with(&[(out, "", 0)]);
    let report = client.du(&["Documents/"]).unwrap();
    assert_eq!(last_call(&mock), args(&["du", "--versions", "Documents/"]));
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.size_total_with_versions, 24576);
}

// ============================================================================
// export
// ============================================================================

#[test]
fn test_export_add() {
    let (client, mock) =
        client_with(&[("Exported /docs/a.pdf: https://mega.nz/file/AbCd#Key", "", 0)]);
    let entry = client.export_add("/docs/a.pdf", false, None).unwrap().unwrap();
    assert_eq!(entry.link, "https://mega.nz/file/AbCd#Key");
    assert_eq!(last_call(&mock), args(&["export", "-f", "-a", "/docs/a.pdf"]));
}

#[test]
fn test_export_add_writable_with_password() {
    let out = "Exported /Shared: https://mega.nz/folder/XyZ#Key\n   AuthToken = tok";
    let (client, mock) = client_with(&[(out, "", 0)]);
    let entry = client
        .export_add("/Shared", true, Some("s3cret"))
        .unwrap()
        .unwrap();
    assert!(entry.is_folder);
    assert_eq!(
        last_call(&mock),
        args(&[
            "export",
            "-f",
            "-a",
            "/Shared",
            "--writable",
            "--password=s3cret",
        ])
    );
}

#[test]
fn test_export_add_pro_warning_still_returns_link() {
    let (client, _) = client_with(&[(
        "Exported /a: https://mega.nz/file/X#K",
        "Only PRO users can protect links with passwords. Showing UNPROTECTED link",
        0,
    )]);
    assert!(client.export_add("/a", false, Some("pw")).unwrap().is_some());
}

#[test]
fn test_export_add_failure_is_none() {
    let (client, _) = client_with(&[("", "Couldn't find", 53)]);
    assert_eq!(client.export_add("/missing", false, None).unwrap(), None);
}

#[test]
fn test_export_add_unrecognised_output() {
    let (client, _) = client_with(&[("Something else", "", 0)]);
    assert!(matches!(
        client.export_add("/a", false, None).unwrap_err(),
        Error::UnexpectedOutput { .. }
    ));
}

#[test]
fn test_export_delete() {
    let (client, mock) = client_with(&[("", "", 0), ("", "not exported", 54)]);
    assert!(client.export_delete("/a").unwrap());
    assert!(!client.export_delete("/b").unwrap());
    assert_eq!(mock.calls()[0], args(&["export", "-d", "/a"]));
}

#[test]
fn test_export_list() {
    let out = "/a.txt (1.00 KB, shared as exported permanent file link: https://mega.nz/file/A#K)";
    let (client, mock) = client_with(&[(out, "", 0), ("", "Couldn't find", 53)]);
    assert_eq!(client.export_list(None).unwrap().len(), 1);
    assert_eq!(last_call(&mock), args(&["export"]));
    assert!(client.export_list(Some("/missing")).unwrap().is_empty());
    assert_eq!(last_call(&mock), args(&["export", "/missing"]));
}

#[test]
fn test_export_dispatch() {
    let listed = "/a.txt (1.00 KB, shared as exported permanent file link: https://mega.nz/file/A#K)";
    let (client, mock) = client_with(&[
        ("Exported /a: https://mega.nz/file/X#K", "", 0),
        ("", "", 0),
        (listed, "", 0),
    ]);

    let outcome = client
        .export(&ExportRequest::Add {
            remote_path: "/a".to_string(),
            writable: false,
            password: None,
        })
        .unwrap();
    assert!(matches!(
        outcome,
        ExportOutcome::Added(Some(ref entry)) if entry.link == "https://mega.nz/file/X#K"
    ));
    assert_eq!(last_call(&mock), args(&["export", "-f", "-a", "/a"]));

    let outcome = client
        .export(&ExportRequest::Delete {
            remote_path: "/a".to_string(),
        })
        .unwrap();
    assert_eq!(outcome, ExportOutcome::Deleted(true));
    assert_eq!(last_call(&mock), args(&["export", "-d", "/a"]));

    let outcome = client
        .export(&ExportRequest::List {
            remote_path: Some("/docs".to_string()),
        })
        .unwrap();
    assert!(matches!(
        outcome,
        ExportOutcome::Listed(ref entries) if entries.len() == 1 && entries[0].remote_path == "/a.txt"
    ));
    assert_eq!(last_call(&mock), args(&["export", "/docs"]));
}

// ============================================================================
// transfers
// ============================================================================

#[test]
fn test_get() {
    let (client, mock) = client_with(&[("Download finished: /tmp/a.txt", "", 0)]);
    let done = client
        .get(
            "/a.txt",
            &GetOptions {
                local_path: Some("/tmp/".to_string()),
                password: Some("pw".to_string()),
                merge: true,
            },
        )
        .unwrap();
    assert!(done);
    assert_eq!(
        last_call(&mock),
        args(&["get", "-m", "--password=pw", "/a.txt", "/tmp"])
    );
}

#[test]
fn test_get_without_finished_marker() {
    let (client, _) = client_with(&[("", "", 0)]);
    assert!(!client.get("/a.txt", &GetOptions::default()).unwrap());
}

#[test]
fn test_get_exit_codes() {
    let (client, _) = client_with(&[("", "", 53), ("", "", 54), ("", "", 55), ("", "", 59)]);
    let opts = GetOptions::default();
    assert!(matches!(
        client.get("/a", &opts).unwrap_err(),
        Error::NotFound { .. }
    ));
    assert!(matches!(
        client.get("/a", &opts).unwrap_err(),
        Error::LocalPath { .. }
    ));
    assert!(matches!(
        client.get("/a", &opts).unwrap_err(),
        Error::InvalidDestination { .. }
    ));
    assert!(matches!(
        client.get("/a", &opts).unwrap_err(),
        Error::CommandFailed { exit_code: 59, .. }
    ));
}

#[test]
fn test_put_single() {
    let (client, mock) = client_with(&[("Upload finished: /a.txt", "", 0)]);
    assert!(client.put(&["./a.txt"], None).unwrap());
    assert_eq!(last_call(&mock), args(&["put", "-c", "./a.txt"]));
}

#[test]
fn test_put_many_forces_folder_destination() {
    let (client, mock) = client_with(&[("Upload finished", "", 0)]);
    assert!(client.put(&["a.txt", "b/"], Some("/Backup")).unwrap());
    assert_eq!(
        last_call(&mock),
        args(&["put", "-c", "a.txt", "b", "/Backup/"])
    );
}

#[test]
fn test_put_many_requires_remote() {
    let (client, mock) = client_with(&[]);
    assert!(matches!(
        client.put(&["a", "b"], None).unwrap_err(),
        Error::InvalidArguments(_)
    ));
    assert!(matches!(
        client.put(&[], Some("/x")).unwrap_err(),
        Error::InvalidArguments(_)
    ));
    assert!(mock.calls().is_empty());
}

#[test]
fn test_put_outcomes() {
    let (client, _) = client_with(&[("", "Not found", 53), ("Transferring...", "", 0)]);
    assert!(!client.put(&["a"], None).unwrap());
    assert!(matches!(
        client.put(&["a"], None).unwrap_err(),
        Error::UnexpectedOutput { ref command, .. } if command == "put"
    ));
}

#[test]
fn test_import() {
    let (client, mock) = client_with(&[
        ("Imported folder complete: /Imported", "", 0),
        ("Imported file complete: /x", "", 0),
        ("Something", "", 0),
        ("", "", 55),
    ]);
    let link = "https://mega.nz/folder/X#K";
    assert!(client.import(link, Some("/Imported"), Some("pw")).unwrap());
    assert_eq!(
        mock.calls()[0],
        args(&["import", link, "--password=pw", "/Imported"])
    );
    assert!(client.import(link, None, None).unwrap());
    assert_eq!(mock.calls()[1], args(&["import", link]));
    assert!(matches!(
        client.import(link, None, None).unwrap_err(),
        Error::UnexpectedOutput { .. }
    ));
    assert!(matches!(
        client.import(link, Some("/bad"), None).unwrap_err(),
        Error::InvalidDestination { ref target, .. } if target == "/bad"
    ));
}

// ============================================================================
// session
// ============================================================================

#[test]
fn test_login_credentials() {
    let (client, mock) = client_with(&[("", "", 0), ("", "Login failed", 56)]);
    let method = LoginMethod::Credentials {
        email: "me@example.com".to_string(),
        password: "pw".to_string(),
        auth_code: Some("123456".to_string()),
    };
    assert!(client.login(&method).unwrap());
    assert_eq!(
        last_call(&mock),
        args(&["login", "me@example.com", "pw", "--auth-code=123456"])
    );
    assert!(!client.login(&method).unwrap());
}

#[test]
fn test_login_session() {
    let (client, mock) = client_with(&[("", "", 0)]);
    assert!(client.login(&LoginMethod::Session("ARabc".to_string())).unwrap());
    assert_eq!(last_call(&mock), args(&["login", "ARabc"]));
}

#[test]
fn test_login_rejects_empty_credentials() {
    let (client, mock) = client_with(&[]);
    let method = LoginMethod::Credentials {
        email: String::new(),
        password: "pw".to_string(),
        auth_code: None,
    };
    assert!(matches!(
        client.login(&method).unwrap_err(),
        Error::InvalidArguments(_)
    ));
    assert!(matches!(
        client.login(&LoginMethod::Session(String::new())).unwrap_err(),
        Error::InvalidArguments(_)
    ));
    assert!(mock.calls().is_empty());
}

#[test]
fn test_logout() {
    let kept = "Logging out...\nYou can also login with the session id: ARkeep";
    let (client, mock) = client_with(&[(kept, "", 0), ("", "", 0), ("", "", 57)]);

    let outcome = client.logout(true).unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.session.as_deref(), Some("ARkeep"));
    assert_eq!(mock.calls()[0], args(&["logout", "--keep-session"]));

    let outcome = client.logout(false).unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.session, None);

    assert!(!client.logout(false).unwrap().success);
}

#[test]
fn test_whoami() {
    let (client, _) = client_with(&[
        ("Account e-mail: me@example.com", "", 0),
        ("", "Not logged in.", 57),
        ("Hello", "", 0),
    ]);
    assert_eq!(client.whoami().unwrap().as_deref(), Some("me@example.com"));
    assert_eq!(client.whoami().unwrap(), None);
    assert!(client.whoami().is_err());
}

#[test]
fn test_session() {
    let (client, _) = client_with(&[
        ("Your (secret) session is: ARsecret", "", 0),
        ("", "Not logged in.", 57),
        ("", "Something broke", 59),
    ]);
    assert_eq!(client.session().unwrap().as_deref(), Some("ARsecret"));
    assert_eq!(client.session().unwrap(), None);
    assert!(matches!(
        client.session().unwrap_err(),
        Error::UnexpectedOutput { .. }
    ));
}

#[test]
fn test_version() {
    let (client, mock) = client_with(&[("MEGAcmd version: 1.6.3.0: code 1060300", "", 0)]);
    assert!(client.version().unwrap().starts_with("MEGAcmd version"));
    assert_eq!(last_call(&mock), args(&["version"]));
}
