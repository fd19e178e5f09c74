//! `SessionLauncher` backed by `gcloud compute ssh`.

use std::process::ExitStatus;

use anyhow::Result;

use crate::application::ports::{CommandRunner, SessionLauncher};
use crate::domain::config::SshConfig;
use crate::domain::instance::InstanceRecord;
use crate::domain::ssh::gcloud_ssh_args;

/// Runs `gcloud compute ssh` with the terminal handed over (inherited stdio).
pub struct GcloudSshLauncher<R> {
    runner: R,
    ssh: SshConfig,
}

impl<R: CommandRunner> GcloudSshLauncher<R> {
    #[must_use]
    pub fn new(runner: R, ssh: SshConfig) -> Self {
        Self { runner, ssh }
    }
}

impl<R: CommandRunner> SessionLauncher for GcloudSshLauncher<R> {
    async fn launch(&self, record: &InstanceRecord, project: &str) -> Result<ExitStatus> {
        let args = gcloud_ssh_args(record, project, &self.ssh);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        tracing::info!(
            instance = %record.name,
            zone = %record.zone,
            project,
            "launching ssh session"
        );
        self.runner.run_status(&self.ssh.gcloud_path, &arg_refs).await
    }
}
