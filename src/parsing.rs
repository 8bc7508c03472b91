use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

fn default_resolution() -> usize {
    512
}

fn default_output() -> PathBuf {
    PathBuf::from("output.png")
}

fn default_progress() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSettings {
    #[serde(default = "default_resolution")]
    pub width: usize,
    #[serde(default = "default_resolution")]
    pub height: usize,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    // None means one worker per logical cpu
    #[serde(default)]
    pub threads: Option<usize>,
    #[serde(default = "default_progress")]
    pub progress: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            width: default_resolution(),
            height: default_resolution(),
            output: default_output(),
            threads: None,
            progress: default_progress(),
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "image dimensions must be nonzero, got {}x{}",
                self.width, self.height
            )
            .into());
        }
        if self.threads == Some(0) {
            return Err("thread count must be nonzero".into());
        }
        Ok(())
    }
}

pub fn load_json<T, P>(path: P) -> Result<T, Box<dyn Error>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let mut input = String::new();
    File::open(path.as_ref())
        .and_then(|mut f| f.read_to_string(&mut input))
        .map_err(|e| format!("failed to read {}: {}", path.as_ref().display(), e))?;

    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: RenderSettings =
            serde_json::from_str(r#"{ "width": 64, "output": "small.png" }"#)
                .expect("failed to parse settings");
        assert!(settings.width == 64);
        assert!(settings.height == 512);
        assert!(settings.output == PathBuf::from("small.png"));
        assert!(settings.threads.is_none());
        assert!(settings.progress);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result = serde_json::from_str::<RenderSettings>(r#"{ "spheres": [] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate() {
        assert!(RenderSettings::default().validate().is_ok());

        let mut settings = RenderSettings::default();
        settings.height = 0;
        assert!(settings.validate().is_err());

        let mut settings = RenderSettings::default();
        settings.threads = Some(0);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_json() {
        let path = std::env::temp_dir().join(format!("sphere_rt_settings_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "height": 32, "threads": 2, "progress": false }"#)
            .expect("failed to write settings");
        let settings: RenderSettings = load_json(&path).expect("failed to load settings");
        let _ = std::fs::remove_file(&path);

        assert!(settings.height == 32);
        assert!(settings.threads == Some(2));
        assert!(!settings.progress);

        assert!(load_json::<RenderSettings, _>(path.with_extension("missing")).is_err());
    }
}
