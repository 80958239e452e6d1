//! Font face lookup and loading

use crate::error::{Error, Result};
use ab_glyph::{Font, FontVec, GlyphId};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Families tried after the requested one
pub const FALLBACK_FAMILIES: [&str; 4] = ["Arial", "DejaVuSans", "LiberationSans", "Helvetica"];

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

/// Directories searched for font files on this platform
pub fn font_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/Library/Fonts"),
        PathBuf::from("/System/Library/Fonts"),
        PathBuf::from("C:\\Windows\\Fonts"),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".fonts"));
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    dirs
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| FONT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Compare names ignoring case, spaces, dashes and underscores
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Depth-first search for a font file whose stem matches `family`
fn search_dir(dir: &Path, family: &str, depth: u32) -> Option<PathBuf> {
    if depth == 0 {
        return None;
    }
    let entries = fs::read_dir(dir).ok()?;

    let mut subdirs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if is_font_file(&path)
            && path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .is_some_and(|stem| normalize(stem) == family)
        {
            return Some(path);
        }
    }

    subdirs.sort();
    subdirs
        .iter()
        .find_map(|sub| search_dir(sub, family, depth - 1))
}

/// Find a font file for exactly `family` in `dirs`
pub fn find_family(dirs: &[PathBuf], family: &str) -> Option<PathBuf> {
    if family.trim().is_empty() {
        return None;
    }
    let name = normalize(family);
    dirs.iter().find_map(|dir| search_dir(dir, &name, 6))
}

/// Find a font file for `family` in `dirs`, trying the fallbacks after it
pub fn locate_in(dirs: &[PathBuf], family: &str) -> Option<PathBuf> {
    std::iter::once(family)
        .chain(FALLBACK_FAMILIES)
        .find_map(|name| find_family(dirs, name))
}

/// Load a face from a file
pub fn load_path(path: &Path) -> Result<FontVec> {
    let data = fs::read(path)?;
    load_bytes(data, path)
}

/// Parse a face from bytes; `origin` names it in errors
pub fn load_bytes(data: Vec<u8>, origin: &Path) -> Result<FontVec> {
    FontVec::try_from_vec(data).map_err(|source| Error::FontParse {
        path: origin.to_path_buf(),
        source,
    })
}

/// Monochrome emoji faces tried after the primary face, in order
///
/// Color bitmap faces (Noto Color Emoji, Apple Color Emoji) have no outlines
/// and are left out.
pub const EMOJI_FAMILIES: [&str; 4] = ["NotoEmoji-Regular", "NotoEmoji", "Symbola", "OpenMoji-black-glyf"];

/// Ordered font faces; each character is drawn with the first face that has it
///
/// Cloning shares the loaded faces.
#[derive(Clone, Default)]
pub struct FontStack {
    faces: Arc<Vec<FontVec>>,
}

impl FontStack {
    pub fn new(faces: Vec<FontVec>) -> Self {
        Self {
            faces: Arc::new(faces),
        }
    }

    pub fn single(face: FontVec) -> Self {
        Self::new(vec![face])
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn primary(&self) -> Option<&FontVec> {
        self.faces.first()
    }

    /// Index of the first face with a real glyph (not `.notdef`) for `ch`
    pub fn face_index(&self, ch: char) -> Option<usize> {
        self.faces.iter().position(|face| face.glyph_id(ch) != GlyphId(0))
    }

    pub fn face_for(&self, ch: char) -> Option<&FontVec> {
        self.face_index(ch).and_then(|i| self.faces.get(i))
    }
}

impl std::fmt::Debug for FontStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontStack").field("faces", &self.faces.len()).finish()
    }
}

/// Load the primary face plus whichever emoji faces `dirs` provide
///
/// Only the primary face is required. Emoji faces that fail to parse are
/// skipped with a warning.
pub fn load_stack_in(dirs: &[PathBuf], family: &str, path: Option<&Path>) -> Result<FontStack> {
    let primary = match path {
        Some(path) => path.to_path_buf(),
        None => locate_in(dirs, family).ok_or_else(|| Error::FontNotFound(family.to_string()))?,
    };
    log::debug!("using font {}", primary.display());

    let mut faces = vec![load_path(&primary)?];
    for emoji in EMOJI_FAMILIES {
        let Some(found) = find_family(dirs, emoji) else { continue };
        if found == primary {
            continue;
        }
        match load_path(&found) {
            Ok(face) => {
                log::debug!("emoji fallback {}", found.display());
                faces.push(face);
                break;
            }
            Err(e) => log::warn!("skipping emoji face: {}", e),
        }
    }

    Ok(FontStack::new(faces))
}

/// [`load_stack_in`] over the platform font directories
pub fn load_stack(family: &str, path: Option<&Path>) -> Result<FontStack> {
    load_stack_in(&font_dirs(), family, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("glyph-grid-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("DejaVu Sans"), "dejavusans");
        assert_eq!(normalize("Liberation-Sans_Regular"), "liberationsansregular");
    }

    #[test]
    fn test_locate_nested_and_case_insensitive() {
        let dir = scratch_dir("locate");
        fs::create_dir_all(dir.join("truetype/msttcorefonts")).unwrap();
        fs::write(dir.join("truetype/msttcorefonts/arial.TTF"), b"").unwrap();
        fs::write(dir.join("readme.txt"), b"").unwrap();

        let found = locate_in(&[dir.clone()], "Arial").unwrap();
        assert!(found.ends_with("truetype/msttcorefonts/arial.TTF"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_locate_falls_back() {
        let dir = scratch_dir("fallback");
        fs::write(dir.join("DejaVuSans.ttf"), b"").unwrap();

        let found = locate_in(&[dir.clone()], "Comic Sans MS").unwrap();
        assert!(found.ends_with("DejaVuSans.ttf"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_locate_nothing() {
        let dir = scratch_dir("empty");
        assert_eq!(locate_in(&[dir.clone()], "Arial"), None);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_rejects_non_font() {
        let dir = scratch_dir("garbage");
        let path = dir.join("broken.ttf");
        fs::write(&path, b"not a font").unwrap();

        assert!(matches!(load_path(&path), Err(Error::FontParse { .. })));
        assert!(matches!(
            load_stack_in(&[dir.clone()], "Arial", Some(&dir.join("missing.ttf"))),
            Err(Error::Io(_))
        ));

        fs::remove_dir_all(&dir).unwrap();
    }

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
    }

    #[test]
    fn test_find_family_is_exact() {
        let dir = scratch_dir("exact");
        fs::write(dir.join("DejaVuSans.ttf"), b"").unwrap();

        assert!(find_family(&[dir.clone()], "Dejavu Sans").is_some());
        assert_eq!(find_family(&[dir.clone()], "Arial"), None);
        assert_eq!(find_family(&[dir.clone()], " "), None);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_stack_skips_missing_glyphs() {
        let stack = FontStack::single(load_path(&fixture("DejaVuSans.ttf")).unwrap());
        assert_eq!(stack.face_index('▲'), Some(0));
        assert_eq!(stack.face_index('🦄'), None);
        assert!(stack.face_for('✨').is_none());
    }

    #[test]
    fn test_stack_falls_through_to_later_face() {
        // The mono face lacks U+01C4, the proportional face has it
        let stack = FontStack::new(vec![
            load_path(&fixture("DejaVuSansMono.ttf")).unwrap(),
            load_path(&fixture("DejaVuSans.ttf")).unwrap(),
        ]);
        assert_eq!(stack.face_index('A'), Some(0));
        assert_eq!(stack.face_index('\u{1C4}'), Some(1));
        assert_eq!(stack.face_index('🎉'), None);
    }

    #[test]
    fn test_load_stack_adds_emoji_face() {
        let dir = scratch_dir("stack");
        fs::copy(fixture("DejaVuSansMono.ttf"), dir.join("DejaVuSansMono.ttf")).unwrap();
        // Stand-in for an emoji face; only the file name matters to the lookup
        fs::copy(fixture("DejaVuSans.ttf"), dir.join("Symbola.ttf")).unwrap();

        let stack = load_stack_in(&[dir.clone()], "DejaVu Sans Mono", None).unwrap();
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.face_index('\u{1C4}'), Some(1));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_stack_without_primary() {
        let dir = scratch_dir("noprimary");
        fs::copy(fixture("DejaVuSans.ttf"), dir.join("Symbola.ttf")).unwrap();

        let result = load_stack_in(&[dir.clone()], "Arial", None);
        assert!(matches!(result, Err(Error::FontNotFound(_))));

        fs::remove_dir_all(&dir).unwrap();
    }
}
