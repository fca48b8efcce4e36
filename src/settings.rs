use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;

/// Per-run configuration shared by every lesson.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub asset_dir: PathBuf,
    pub screen_width: u32,
    pub screen_height: u32,
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("."),
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            title: String::from("SDL Tutorial"),
        }
    }
}

impl Settings {
    pub fn asset_path(&self, file_name: &str) -> PathBuf {
        self.asset_dir.join(file_name)
    }

    pub fn with_asset_dir(mut self, asset_dir: &Path) -> Self {
        self.asset_dir = asset_dir.to_path_buf();
        self
    }
}

#[derive(Debug, PartialEq)]
pub struct Args {
    pub lesson: String,
    pub settings: Settings,
}

/// Parses `<program> <lesson> [asset dir]`. Returns `None` when no lesson was named.
pub fn parse_args<I>(args: I) -> Option<Args>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter().skip(1);

    let lesson = args.next()?.to_string_lossy().into_owned();

    let mut settings = Settings::default();
    if let Some(asset_dir) = args.next() {
        settings = settings.with_asset_dir(Path::new(&asset_dir));
    }
    settings.title = format!("SDL Tutorial - {}", lesson);

    Some(Args { lesson, settings })
}

#[cfg(test)]
mod tests {
    use std::{ffi::OsString, path::PathBuf};

    use super::{parse_args, Settings};

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn no_lesson_gives_none() {
        assert_eq!(parse_args(os_args(&["sdltutorial"])), None);
    }

    #[test]
    fn lesson_without_asset_dir_uses_working_dir() {
        let args = parse_args(os_args(&["sdltutorial", "timer"])).unwrap();
        assert_eq!(args.lesson, "timer");
        assert_eq!(args.settings.asset_dir, PathBuf::from("."));
        assert_eq!(args.settings.title, "SDL Tutorial - timer");
    }

    #[test]
    fn asset_dir_is_joined_with_file_names() {
        let args = parse_args(os_args(&["sdltutorial", "png", "assets"])).unwrap();
        assert_eq!(
            args.settings.asset_path("texture.png"),
            PathBuf::from("assets").join("texture.png")
        );
    }

    #[test]
    fn default_screen_size() {
        let settings = Settings::default();
        assert_eq!((settings.screen_width, settings.screen_height), (640, 480));
    }
}
