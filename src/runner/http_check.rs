use std::time::Duration;

pub const HTTP_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// One GET against the target URL. Redirects are followed by the client, so
/// the final response decides the outcome: 2xx and 3xx pass, anything else
/// fails with a status detail, and transport errors fail with their own
/// detail.
pub fn probe_url(url: &str) -> Result<u16, String> {
    let response = match ureq::get(url).timeout(HTTP_CHECK_TIMEOUT).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(status, _)) => {
            return Err(format!("HTTP check failed with status {status}"));
        }
        Err(err) => return Err(err.to_string()),
    };

    let status = response.status();
    if (200..400).contains(&status) {
        Ok(status)
    } else {
        Err(format!("HTTP check failed with status {status}"))
    }
}
