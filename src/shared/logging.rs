use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn app_log_path(state_root: &Path) -> PathBuf {
    state_root.join("logs/portail.log")
}

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

pub fn append_app_log(state_root: &Path, level: &str, event: &str, message: &str) {
    let payload = serde_json::json!({
        "timestamp": now_secs(),
        "level": level,
        "event": event,
        "message": message,
    });

    let Ok(line) = serde_json::to_string(&payload) else {
        return;
    };

    let path = app_log_path(state_root);
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(mut file) = fs::OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    let _ = writeln!(file, "{line}");
}

pub fn email_fingerprint(email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.trim().to_lowercase().as_bytes());
    let digest = hasher.finalize();
    digest[..8].iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn append_app_log_writes_one_json_line_per_call() {
        let dir = tempdir().expect("tempdir");
        append_app_log(dir.path(), "info", "submission.accepted", "first");
        append_app_log(dir.path(), "error", "submission.failed", "second");

        let raw = fs::read_to_string(app_log_path(dir.path())).expect("read log");
        let lines: Vec<serde_json::Value> = raw
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "submission.accepted");
        assert_eq!(lines[1]["level"], "error");
    }

    #[test]
    fn email_fingerprint_ignores_case_and_padding() {
        assert_eq!(
            email_fingerprint(" A@B.com "),
            email_fingerprint("a@b.com")
        );
        assert_eq!(email_fingerprint("a@b.com").len(), 16);
    }
}
