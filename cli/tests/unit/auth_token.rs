//! Token acquisition: environment override and `gcloud` fallback.
//!
//! These tests mutate `CLOUDSDK_AUTH_ACCESS_TOKEN` and are serialized.

#![allow(clippy::expect_used, unsafe_code)]

use gcp_rider::domain::FetchError;
use gcp_rider::infra::auth::{TOKEN_ENV, TokenSource};
use serial_test::serial;

use crate::helpers::{RecordingRunner, err_output, ok_output};

fn clear_env() {
    // SAFETY: every test touching TOKEN_ENV is #[serial].
    unsafe { std::env::remove_var(TOKEN_ENV) };
}

#[tokio::test]
#[serial]
async fn test_env_token_wins_and_skips_gcloud() {
    // SAFETY: serialized.
    unsafe { std::env::set_var(TOKEN_ENV, "  ya29.env-token \n") };
    let source = TokenSource::from_env(RecordingRunner::exiting(1), "gcloud");
    clear_env();

    assert!(matches!(source, TokenSource::Static(_)));
    assert_eq!(source.access_token().await.expect("token"), "ya29.env-token");
}

#[tokio::test]
#[serial]
async fn test_blank_env_token_falls_back_to_gcloud() {
    // SAFETY: serialized.
    unsafe { std::env::set_var(TOKEN_ENV, "   ") };
    let source = TokenSource::from_env(RecordingRunner::replying(ok_output(b"ya29.cli\n")), "gcloud");
    clear_env();

    assert_eq!(source.access_token().await.expect("token"), "ya29.cli");
    let TokenSource::Gcloud { runner, .. } = &source else {
        panic!("expected gcloud source");
    };
    assert_eq!(
        runner.calls(),
        vec![vec!["gcloud", "auth", "print-access-token"]]
    );
}

#[tokio::test]
#[serial]
async fn test_gcloud_failure_is_auth_error_with_stderr() {
    clear_env();
    let runner = RecordingRunner::replying(err_output(1, b"ERROR: no active account\n"));
    let source = TokenSource::from_env(runner, "gcloud");

    let err = source.access_token().await.expect_err("should fail");

    let FetchError::Auth(msg) = err else {
        panic!("expected auth error, got {err:?}");
    };
    assert!(msg.contains("no active account"), "{msg}");
}

#[tokio::test]
#[serial]
async fn test_empty_gcloud_output_is_auth_error() {
    clear_env();
    let source = TokenSource::from_env(RecordingRunner::replying(ok_output(b"\n")), "gcloud");

    let err = source.access_token().await.expect_err("should fail");

    assert!(matches!(err, FetchError::Auth(_)), "{err:?}");
}

#[tokio::test]
#[serial]
async fn test_missing_gcloud_binary_is_auth_error() {
    clear_env();
    let source = TokenSource::from_env(RecordingRunner::unspawnable(), "gcloud");

    let err = source.access_token().await.expect_err("should fail");

    let FetchError::Auth(msg) = err else {
        panic!("expected auth error, got {err:?}");
    };
    assert!(msg.contains("failed to spawn"), "{msg}");
}
