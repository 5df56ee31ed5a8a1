use std::time::Instant;

/// Run `op`, logging its start time, duration, and outcome. The wrapped
/// value passes through unchanged.
pub fn timed<T>(name: &str, op: impl FnOnce() -> T) -> T {
    let started = chrono::Utc::now();
    let t0 = Instant::now();
    let value = op();
    tracing::info!(
        target: "recon",
        stage = name,
        started = %started.to_rfc3339(),
        duration_ms = t0.elapsed().as_millis() as u64,
        status = "ok",
        "stage finished"
    );
    value
}

/// Fallible variant of [`timed`]. Errors are logged with their duration,
/// then propagated untouched.
pub fn try_timed<T, E>(name: &str, op: impl FnOnce() -> Result<T, E>) -> Result<T, E>
where
    E: std::fmt::Display,
{
    let started = chrono::Utc::now();
    let t0 = Instant::now();
    let result = op();
    let duration_ms = t0.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => tracing::info!(
            target: "recon",
            stage = name,
            started = %started.to_rfc3339(),
            duration_ms,
            status = "ok",
            "stage finished"
        ),
        Err(e) => tracing::error!(
            target: "recon",
            stage = name,
            started = %started.to_rfc3339(),
            duration_ms,
            status = "error",
            error = %e,
            "stage failed"
        ),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_passes_value_through() {
        let value = timed("add", || 40 + 2);
        assert_eq!(value, 42);
    }

    #[test]
    fn try_timed_passes_ok_through() {
        let result: Result<u32, String> = try_timed("ok", || Ok(7));
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn try_timed_propagates_error_untouched() {
        let result: Result<u32, String> = try_timed("fail", || Err("boom".to_string()));
        assert_eq!(result.unwrap_err(), "boom");
    }

    #[test]
    fn timed_works_with_captured_state() {
        let rows = vec![1, 2, 3];
        let total = timed("sum", || rows.iter().sum::<i32>());
        assert_eq!(total, 6);
    }
}
