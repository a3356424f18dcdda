//! The named fixture files and the routine that writes them to disk.

use crate::errors::ValidationError;
use crate::float_types::MM;
use crate::io::{IoError, stl};
use crate::mesh::Mesh;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory the fixtures are written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/test-stl";

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error("could not create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("fixture {file_name} is invalid: {source}")]
    Validation {
        file_name: String,
        source: ValidationError,
    },
}

/// One mesh and the file name it is written under.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub file_name: String,
    pub mesh: Mesh,
}

impl Fixture {
    pub fn new(file_name: impl Into<String>, mesh: Mesh) -> Self {
        Fixture { file_name: file_name.into(), mesh }
    }
}

/// Where and how fixtures are written.
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
    pub header: String,
    /// Reject meshes with non-finite coordinates instead of encoding them as-is.
    pub strict: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            header: stl::DEFAULT_HEADER.to_string(),
            strict: false,
        }
    }
}

/// Result of writing one fixture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub triangle_count: usize,
    pub bytes: usize,
}

/// The standard fixture set: a 10 mm cube, a 2 mm cube and an 8 × 6 mm pyramid.
pub fn default_fixtures() -> Result<Vec<Fixture>, ValidationError> {
    Ok(vec![
        Fixture::new("test_cube_10mm.stl", Mesh::cube(10.0 * MM)?),
        // small cube for detail testing
        Fixture::new("test_cube_2mm.stl", Mesh::cube(2.0 * MM)?),
        Fixture::new("test_pyramid_8x6mm.stl", Mesh::pyramid(8.0 * MM, 6.0 * MM)?),
    ])
}

/// Write `fixtures` into `options.output_dir`, creating it if needed.
///
/// Files are written one after another; a failure stops the run but leaves
/// the files already written in place.
pub fn generate(
    options: &GenerateOptions,
    fixtures: &[Fixture],
) -> Result<Vec<GeneratedFile>, FixtureError> {
    fs::create_dir_all(&options.output_dir).map_err(|source| FixtureError::CreateDir {
        path: options.output_dir.clone(),
        source,
    })?;
    debug!("writing {} fixtures to {}", fixtures.len(), options.output_dir.display());

    let mut generated = Vec::with_capacity(fixtures.len());
    for fixture in fixtures {
        if options.strict {
            fixture.mesh.validate().map_err(|source| FixtureError::Validation {
                file_name: fixture.file_name.clone(),
                source,
            })?;
        }

        let path = options.output_dir.join(&fixture.file_name);
        fixture.mesh.write_stl(&path, &options.header)?;

        generated.push(GeneratedFile {
            path,
            triangle_count: fixture.mesh.len(),
            bytes: stl::binary_size(fixture.mesh.len()),
        });
    }

    info!("generated {} fixture files in {}", generated.len(), options.output_dir.display());
    Ok(generated)
}

/// Console report for a finished run: one line per file, then the output
/// directory and a closing line.
pub fn summary_lines(output_dir: &Path, generated: &[GeneratedFile]) -> Vec<String> {
    let mut lines: Vec<String> = generated
        .iter()
        .map(|file| {
            let name = file.path.file_name().unwrap_or(file.path.as_os_str());
            format!("✅ Created {} ({} triangles)", name.to_string_lossy(), file.triangle_count)
        })
        .collect();

    lines.push(String::new());
    lines.push(format!("Test STL files created in: {}", output_dir.display()));
    lines.push("Files ready for 3D integration testing!".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::Real;
    use crate::mesh::Triangle;

    fn options_in(dir: &std::path::Path) -> GenerateOptions {
        GenerateOptions {
            output_dir: dir.join("nested").join("test-stl"),
            ..GenerateOptions::default()
        }
    }

    #[test]
    fn default_fixture_names_and_sizes() {
        let fixtures = default_fixtures().unwrap();
        let names: Vec<_> = fixtures.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(
            names,
            ["test_cube_10mm.stl", "test_cube_2mm.stl", "test_pyramid_8x6mm.stl"]
        );
        let counts: Vec<_> = fixtures.iter().map(|f| f.mesh.len()).collect();
        assert_eq!(counts, [12, 12, 6]);
    }

    #[test]
    fn generate_creates_directory_and_files() {
        let tmp = tempfile::tempdir().unwrap();
        let options = options_in(tmp.path());

        let generated = generate(&options, &default_fixtures().unwrap()).unwrap();
        assert_eq!(generated.len(), 3);

        for (file, expected) in generated.iter().zip([684u64, 684, 384]) {
            let len = fs::metadata(&file.path).unwrap().len();
            assert_eq!(len, expected, "{}", file.path.display());
            assert_eq!(file.bytes as u64, expected);
        }
    }

    #[test]
    fn strict_mode_rejects_non_finite_mesh() {
        let tmp = tempfile::tempdir().unwrap();
        let options = GenerateOptions { strict: true, ..options_in(tmp.path()) };

        let bad = Mesh::from_triangles(vec![Triangle::from([
            [0.0, 0.0, 0.0],
            [Real::NAN, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        ])]);
        let fixtures = [
            Fixture::new("good.stl", Mesh::cube(1.0).unwrap()),
            Fixture::new("bad.stl", bad),
        ];

        let err = generate(&options, &fixtures).unwrap_err();
        assert!(matches!(err, FixtureError::Validation { ref file_name, .. } if file_name == "bad.stl"));

        // earlier files stay on disk
        assert!(options.output_dir.join("good.stl").exists());
        assert!(!options.output_dir.join("bad.stl").exists());
    }

    #[test]
    fn lenient_mode_writes_non_finite_mesh() {
        let tmp = tempfile::tempdir().unwrap();
        let options = options_in(tmp.path());

        let odd = Mesh::from_triangles(vec![Triangle::from([
            [0.0, 0.0, 0.0],
            [Real::INFINITY, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        ])]);
        let generated = generate(&options, &[Fixture::new("odd.stl", odd)]).unwrap();
        assert_eq!(fs::metadata(&generated[0].path).unwrap().len(), 134);
    }

    #[test]
    fn summary_lists_files_and_closes_with_ready_line() {
        let tmp = tempfile::tempdir().unwrap();
        let options = options_in(tmp.path());
        let generated = generate(&options, &default_fixtures().unwrap()).unwrap();

        let lines = summary_lines(&options.output_dir, &generated);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "✅ Created test_cube_10mm.stl (12 triangles)");
        assert_eq!(lines[2], "✅ Created test_pyramid_8x6mm.stl (6 triangles)");
        assert_eq!(lines[3], "");
        assert_eq!(
            lines[4],
            format!("Test STL files created in: {}", options.output_dir.display())
        );
        assert_eq!(lines.last().unwrap(), "Files ready for 3D integration testing!");
    }
}
