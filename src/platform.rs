//! Operating system label for the `os=` field.
//!
//! Names follow the kernel naming used by `uname -s` (`Linux`, `Darwin`,
//! `Windows`) rather than Rust's lowercase target names.

/// Label for the host this binary runs on.
pub fn os_label() -> String {
    system_name(std::env::consts::OS)
}

/// Map a Rust target OS name to its system name.
fn system_name(os: &str) -> String {
    let known = match os {
        "linux" | "android" => "Linux",
        "macos" | "ios" => "Darwin",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        "dragonfly" => "DragonFly",
        "solaris" | "illumos" => "SunOS",
        _ => return capitalize(os),
    };
    known.to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
