// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Resource category classification and asset layout.
//!
//! Every asset a program ships belongs to a [`ResourceCategory`], and every
//! category maps to a canonical subdirectory under the assets root through
//! an [`AssetLayout`]. The layout is a plain runtime configuration object
//! rather than a compile-time table, so hosts can override any single
//! subdirectory without recompiling, and resolvers stay pure and testable.
//!
//! # Layout Tree
//!
//! The default layout forms a tree rooted at `assets`:
//!
//! ```text
//! assets/
//! ├── bin/
//! ├── audio/
//! │   ├── sfx/
//! │   └── music/
//! ├── videos/
//! ├── images/
//! │   ├── textures/
//! │   └── sprites/
//! ├── models/
//! └── scripts/
//! ```
//!
//! Each path is independently overridable. Overriding `audio` does not
//! re-derive `sfx` or `music`; children keep whatever value they were
//! configured with.

use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Error as FmtError, Formatter, Result as FmtResult},
    path::{Path, PathBuf},
    str::FromStr,
};

/// Classification of an asset used to select its storage subdirectory.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    /// Sentinel for names that match no category.
    Unknown,

    /// Generic asset with no finer classification.
    Asset,

    /// Precompiled binary payloads.
    Bin,

    /// General audio content.
    Audio,

    /// Short sound effects.
    Sfx,

    /// Background music tracks.
    Music,

    /// General image content.
    Image,

    /// Video content.
    Video,

    /// Texture images.
    Texture,

    /// Sprite sheets.
    Sprite,

    /// 3D model data.
    Model,

    /// Script sources.
    Script,

    /// Anything that fits nowhere else.
    Misc,
}

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "bmp", "gif", "tga", "webp"];
const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "mkv", "webm", "avi", "mov"];
const AUDIO_EXTENSIONS: [&str; 5] = ["mp3", "wav", "ogg", "flac", "opus"];

impl ResourceCategory {
    /// All resource categories in declaration order.
    pub const VARIANTS: [ResourceCategory; 13] = [
        ResourceCategory::Unknown,
        ResourceCategory::Asset,
        ResourceCategory::Bin,
        ResourceCategory::Audio,
        ResourceCategory::Sfx,
        ResourceCategory::Music,
        ResourceCategory::Image,
        ResourceCategory::Video,
        ResourceCategory::Texture,
        ResourceCategory::Sprite,
        ResourceCategory::Model,
        ResourceCategory::Script,
        ResourceCategory::Misc,
    ];

    /// Textual name of the category, which doubles as its URI scheme.
    pub const fn name(self) -> &'static str {
        match self {
            ResourceCategory::Unknown => "unknown",
            ResourceCategory::Asset => "asset",
            ResourceCategory::Bin => "bin",
            ResourceCategory::Audio => "audio",
            ResourceCategory::Sfx => "sfx",
            ResourceCategory::Music => "music",
            ResourceCategory::Image => "image",
            ResourceCategory::Video => "video",
            ResourceCategory::Texture => "texture",
            ResourceCategory::Sprite => "sprite",
            ResourceCategory::Model => "model",
            ResourceCategory::Script => "script",
            ResourceCategory::Misc => "misc",
        }
    }

    /// Match a name against the category's textual names.
    ///
    /// Matching is exact and case-sensitive. A name that matches nothing
    /// maps to [`ResourceCategory::Unknown`] rather than an error, so
    /// callers decide how strict to be.
    pub fn from_name(name: &str) -> ResourceCategory {
        ResourceCategory::VARIANTS
            .into_iter()
            .find(|category| category.name() == name)
            .unwrap_or(ResourceCategory::Unknown)
    }

    /// Classify a path by its file extension.
    ///
    /// The extension is the substring after the last `.` of the path, or
    /// empty when there is none. Membership is checked against the image,
    /// video, and audio extension sets in that fixed priority order. An
    /// extension matching none of them classifies as the generic
    /// [`ResourceCategory::Asset`], never [`ResourceCategory::Unknown`].
    //
    // TODO: Classify script and model extensions too. Needs agreement on
    // which script languages to recognize before the sets can be fixed.
    pub fn from_extension(path: &str) -> ResourceCategory {
        let extension = match path.rfind('.') {
            Some(position) => &path[position + 1..],
            None => "",
        };

        if IMAGE_EXTENSIONS.contains(&extension) {
            ResourceCategory::Image
        } else if VIDEO_EXTENSIONS.contains(&extension) {
            ResourceCategory::Video
        } else if AUDIO_EXTENSIONS.contains(&extension) {
            ResourceCategory::Audio
        } else {
            ResourceCategory::Asset
        }
    }
}

impl Display for ResourceCategory {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(self.name())
    }
}

/// Category to subdirectory mapping under an assets root.
///
/// Every field holds the full relative subdirectory for one category, or
/// nothing when the category has no storage location ([`misc`] by default).
/// Fields are independent of one another. Deserializing a partial table
/// keeps the documented default for every field left out.
///
/// [`misc`]: AssetLayout::misc
#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Serialize)]
pub struct AssetLayout {
    /// Subdirectory for generic assets.
    #[serde(default = "default_asset", skip_serializing_if = "Option::is_none")]
    pub asset: Option<PathBuf>,

    /// Subdirectory for binary payloads.
    #[serde(default = "default_bin", skip_serializing_if = "Option::is_none")]
    pub bin: Option<PathBuf>,

    /// Subdirectory for general audio.
    #[serde(default = "default_audio", skip_serializing_if = "Option::is_none")]
    pub audio: Option<PathBuf>,

    /// Subdirectory for sound effects.
    #[serde(default = "default_sfx", skip_serializing_if = "Option::is_none")]
    pub sfx: Option<PathBuf>,

    /// Subdirectory for music tracks.
    #[serde(default = "default_music", skip_serializing_if = "Option::is_none")]
    pub music: Option<PathBuf>,

    /// Subdirectory for general images.
    #[serde(default = "default_image", skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,

    /// Subdirectory for videos.
    #[serde(default = "default_video", skip_serializing_if = "Option::is_none")]
    pub video: Option<PathBuf>,

    /// Subdirectory for textures.
    #[serde(default = "default_texture", skip_serializing_if = "Option::is_none")]
    pub texture: Option<PathBuf>,

    /// Subdirectory for sprite sheets.
    #[serde(default = "default_sprite", skip_serializing_if = "Option::is_none")]
    pub sprite: Option<PathBuf>,

    /// Subdirectory for 3D models.
    #[serde(default = "default_model", skip_serializing_if = "Option::is_none")]
    pub model: Option<PathBuf>,

    /// Subdirectory for scripts.
    #[serde(default = "default_script", skip_serializing_if = "Option::is_none")]
    pub script: Option<PathBuf>,

    /// Subdirectory for miscellaneous content. None by default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub misc: Option<PathBuf>,
}

impl AssetLayout {
    /// Canonical relative subdirectory for given category.
    ///
    /// Total lookup. [`ResourceCategory::Unknown`] and any category whose
    /// entry is absent map to no path.
    pub fn path_for(&self, category: ResourceCategory) -> Option<&Path> {
        match category {
            ResourceCategory::Unknown => None,
            ResourceCategory::Asset => self.asset.as_deref(),
            ResourceCategory::Bin => self.bin.as_deref(),
            ResourceCategory::Audio => self.audio.as_deref(),
            ResourceCategory::Sfx => self.sfx.as_deref(),
            ResourceCategory::Music => self.music.as_deref(),
            ResourceCategory::Image => self.image.as_deref(),
            ResourceCategory::Video => self.video.as_deref(),
            ResourceCategory::Texture => self.texture.as_deref(),
            ResourceCategory::Sprite => self.sprite.as_deref(),
            ResourceCategory::Model => self.model.as_deref(),
            ResourceCategory::Script => self.script.as_deref(),
            ResourceCategory::Misc => self.misc.as_deref(),
        }
    }
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self {
            asset: default_asset(),
            bin: default_bin(),
            audio: default_audio(),
            sfx: default_sfx(),
            music: default_music(),
            image: default_image(),
            video: default_video(),
            texture: default_texture(),
            sprite: default_sprite(),
            model: default_model(),
            script: default_script(),
            misc: None,
        }
    }
}

impl FromStr for AssetLayout {
    type Err = LayoutError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let mut layout: AssetLayout = toml::de::from_str(data).map_err(LayoutError::Deserialize)?;

        // INVARIANT: Perform shell expansion on every configured path.
        for entry in [
            &mut layout.asset,
            &mut layout.bin,
            &mut layout.audio,
            &mut layout.sfx,
            &mut layout.music,
            &mut layout.image,
            &mut layout.video,
            &mut layout.texture,
            &mut layout.sprite,
            &mut layout.model,
            &mut layout.script,
            &mut layout.misc,
        ] {
            if let Some(path) = entry.take() {
                let expanded = shellexpand::full(path.to_string_lossy().as_ref())
                    .map_err(LayoutError::ShellExpansion)?
                    .into_owned();
                *entry = Some(PathBuf::from(expanded));
            }
        }

        Ok(layout)
    }
}

impl Display for AssetLayout {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        fmt.write_str(
            toml::ser::to_string_pretty(self)
                .map_err(LayoutError::Serialize)?
                .as_str(),
        )
    }
}

fn default_asset() -> Option<PathBuf> {
    Some(PathBuf::from("assets"))
}

fn default_bin() -> Option<PathBuf> {
    Some(PathBuf::from("assets/bin"))
}

fn default_audio() -> Option<PathBuf> {
    Some(PathBuf::from("assets/audio"))
}

fn default_sfx() -> Option<PathBuf> {
    Some(PathBuf::from("assets/audio/sfx"))
}

fn default_music() -> Option<PathBuf> {
    Some(PathBuf::from("assets/audio/music"))
}

fn default_image() -> Option<PathBuf> {
    Some(PathBuf::from("assets/images"))
}

fn default_video() -> Option<PathBuf> {
    Some(PathBuf::from("assets/videos"))
}

fn default_texture() -> Option<PathBuf> {
    Some(PathBuf::from("assets/images/textures"))
}

fn default_sprite() -> Option<PathBuf> {
    Some(PathBuf::from("assets/images/sprites"))
}

fn default_model() -> Option<PathBuf> {
    Some(PathBuf::from("assets/models"))
}

fn default_script() -> Option<PathBuf> {
    Some(PathBuf::from("assets/scripts"))
}

/// Asset layout configuration error types.
#[derive(Clone, Debug, thiserror::Error)]
pub enum LayoutError {
    /// Failed to deserialize layout configuration.
    #[error(transparent)]
    Deserialize(#[from] toml::de::Error),

    /// Failed to serialize layout configuration.
    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),

    /// Failed to perform shell expansion on layout configuration.
    #[error(transparent)]
    ShellExpansion(#[from] shellexpand::LookupError<std::env::VarError>),
}

impl From<LayoutError> for FmtError {
    fn from(_: LayoutError) -> Self {
        FmtError
    }
}

/// Friendly result alias :3
pub type Result<T, E = LayoutError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use sealed_test::prelude::*;
    use simple_test_case::test_case;

    #[test]
    fn category_names_round_trip() {
        for category in ResourceCategory::VARIANTS {
            assert_eq!(ResourceCategory::from_name(category.name()), category);
        }
    }

    #[test_case("bogus"; "unrecognized name")]
    #[test_case("Image"; "case sensitive match")]
    #[test_case(""; "empty name")]
    #[test]
    fn unmatched_name_maps_to_unknown(name: &str) {
        use pretty_assertions::assert_eq;
        assert_eq!(ResourceCategory::from_name(name), ResourceCategory::Unknown);
    }

    #[test_case("photo.png", ResourceCategory::Image; "png is image")]
    #[test_case("clip.mp4", ResourceCategory::Video; "mp4 is video")]
    #[test_case("song.mp3", ResourceCategory::Audio; "mp3 is audio")]
    #[test_case("data.xyz", ResourceCategory::Asset; "unmatched extension")]
    #[test_case("noext", ResourceCategory::Asset; "no extension")]
    #[test_case("archive.tar.gz", ResourceCategory::Asset; "last dot wins")]
    #[test]
    fn classify_by_extension(path: &str, expect: ResourceCategory) {
        use pretty_assertions::assert_eq;
        assert_eq!(ResourceCategory::from_extension(path), expect);
    }

    #[test]
    fn default_layout_forms_assets_tree() {
        let layout = AssetLayout::default();
        assert_eq!(
            layout.path_for(ResourceCategory::Sfx),
            Some(Path::new("assets/audio/sfx"))
        );
        assert_eq!(
            layout.path_for(ResourceCategory::Texture),
            Some(Path::new("assets/images/textures"))
        );
        assert_eq!(layout.path_for(ResourceCategory::Unknown), None);
        assert_eq!(layout.path_for(ResourceCategory::Misc), None);
    }

    #[test]
    fn overriding_parent_keeps_children() -> anyhow::Result<()> {
        let layout: AssetLayout = indoc! {r#"
            audio = "content/sound"
        "#}
        .parse()?;

        assert_eq!(
            layout.path_for(ResourceCategory::Audio),
            Some(Path::new("content/sound"))
        );
        assert_eq!(
            layout.path_for(ResourceCategory::Sfx),
            Some(Path::new("assets/audio/sfx"))
        );

        Ok(())
    }

    #[sealed_test(env = [("BLAH", "blah/assets")])]
    fn deserialize_expands_shell_variables() -> anyhow::Result<()> {
        let layout: AssetLayout = indoc! {r#"
            asset = "$BLAH"
            misc = "$BLAH/misc"
        "#}
        .parse()?;

        assert_eq!(
            layout.path_for(ResourceCategory::Asset),
            Some(Path::new("blah/assets"))
        );
        assert_eq!(
            layout.path_for(ResourceCategory::Misc),
            Some(Path::new("blah/assets/misc"))
        );

        Ok(())
    }

    #[test]
    fn serialize_default_layout() {
        let result = AssetLayout::default().to_string();
        let expect = indoc! {r#"
            asset = "assets"
            bin = "assets/bin"
            audio = "assets/audio"
            sfx = "assets/audio/sfx"
            music = "assets/audio/music"
            image = "assets/images"
            video = "assets/videos"
            texture = "assets/images/textures"
            sprite = "assets/images/sprites"
            model = "assets/models"
            script = "assets/scripts"
        "#};

        assert_eq!(result, expect);
    }
}
