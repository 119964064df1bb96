/// Run the chooser helper if it is present and executable. Fire and forget:
/// the merge never depends on the outcome and no failure is surfaced.
/// No-op on anything but Linux.
pub fn try_run_chooser() {
    #[cfg(target_os = "linux")]
    {
        use std::os::unix::fs::PermissionsExt;
        use std::path::Path;
        use std::process::Command;

        const CHOOSER_PATH: &str = "/desktop/sh/chooser.sh";

        let path = Path::new(CHOOSER_PATH);
        let executable = path
            .metadata()
            .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false);
        if executable {
            let _ = Command::new(path).status();
        }
    }
}
