use crate::domain::config::SshConfig;
use crate::domain::instance::InstanceRecord;

/// Builds the argument vector for `gcloud compute ssh` (program name excluded).
#[must_use]
pub fn gcloud_ssh_args(record: &InstanceRecord, project: &str, ssh: &SshConfig) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "compute".into(),
        "ssh".into(),
        record.name.clone(),
        "--zone".into(),
        record.zone.clone(),
        "--project".into(),
        project.to_string(),
    ];
    if ssh.tunnel_through_iap {
        args.push("--tunnel-through-iap".into());
    }
    if !ssh.extra_args.is_empty() {
        args.push("--".into());
        args.extend(ssh.extra_args.iter().cloned());
    }
    args
}

// ── Unit tests ───────────────────────────────────────────────────────────────
