//! URLs and form fields understood by the access point's web server.

/// Number of radio interfaces queried per scan (`unit=0` and `unit=1`).
pub const INTERFACES: u8 = 2;

/// Page the login form redirects to, and the one carrying the client table.
pub const STATUS_PAGE: &str = "StatusClients.htm";

pub fn login_url(host: &str) -> String {
    format!("https://{host}/login.cgi")
}

/// The `&&` is not a typo, the web interface expects it verbatim.
pub fn status_url(host: &str, unit: u8) -> String {
    format!("https://{host}/{STATUS_PAGE}&&unit={unit}&vap=0")
}

pub fn login_form<'a>(username: &'a str, password: &'a str) -> [(&'static str, &'a str); 5] {
    [
        ("login_name", username),
        ("login_pwd", password),
        ("todo", "login"),
        ("this_file", "login.htm"),
        ("next_file", STATUS_PAGE),
    ]
}
