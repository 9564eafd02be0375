// The testing framework in this file is pretty much entirely copied from
// rust-analyzer's parser and lexer tests:
// https://github.com/rust-analyzer/rust-analyzer/blob/master/crates/syntax/src/tests.rs

use indexmap::IndexMap;
use std::{
    env,
    fmt::Write,
    fs,
    path::{Path, PathBuf},
};

use expect_test::expect_file;

use crate::{Lexer, Parser};

// To run these tests and update files:
// ```bash
// env UPDATE_EXPECT=1 cargo test --package php-parser
// ```
// or on windows
// ```bash
// $env:UPDATE_EXPECT=1; cargo test --package php-parser
// ```
#[test]
fn lexer_tests() {
    dir_tests(&test_data_dir(), &["lexer/ok"], "txt", |text, path| {
        let (tokens, error) = Lexer::new(text).lex();
        assert!(
            error.is_none(),
            "There should be no errors in the file {:?}, got: {}",
            path.display(),
            error.unwrap()
        );
        dump_tokens(&tokens)
    });

    dir_tests(&test_data_dir(), &["lexer/err"], "txt", |text, path| {
        let (tokens, error) = Lexer::new(text).lex();
        let error = error.unwrap_or_else(|| {
            panic!("There should be an error in the file {:?}", path.display())
        });
        let mut acc = dump_tokens(&tokens);
        writeln!(acc, "{error}").unwrap();
        acc
    });
}

#[test]
fn parser_tests() {
    dir_tests(&test_data_dir(), &["parser/ok"], "txt", |text, path| {
        match Parser::new(text).parse() {
            Ok(tree) => format!("{tree:?}"),
            Err(err) => panic!(
                "There should be no errors in the file {:?}, got: {}",
                path.display(),
                err
            ),
        }
    });

    dir_tests(&test_data_dir(), &["parser/err"], "txt", |text, path| {
        match Parser::new(text).parse() {
            Ok(_) => panic!("There should be an error in the file {:?}", path.display()),
            Err(err) => format!("{err}\n"),
        }
    });
}

fn dump_tokens(tokens: &[crate::Token]) -> String {
    let mut acc = String::new();
    for token in tokens {
        writeln!(acc, "{token:?}").unwrap();
    }
    acc
}

/// Compares input code taken from a `.php` file in test_data and its
/// expected output in the corresponding `.txt` file.
///
/// The test fails if the output differs.
///
/// If a matching file does not exist, it will be created, filled with
/// output, but fail the test.
fn dir_tests<F>(test_data_dir: &Path, paths: &[&str], outfile_extension: &str, f: F)
where
    F: Fn(&str, &Path) -> String,
{
    for (path, input_code) in collect_php_files(test_data_dir, paths) {
        let actual = f(&input_code, &path);
        let path = path.with_extension(outfile_extension);
        expect_file![path].assert_eq(&actual)
    }
}

/// Collects all `.php` files from `dir` subdirectories defined by `paths`.
fn collect_php_files(root_dir: &Path, paths: &[&str]) -> Vec<(PathBuf, String)> {
    paths
        .iter()
        .flat_map(|path| {
            let path = root_dir.to_owned().join(path);
            php_files_in_dir(&path).into_iter()
        })
        .map(|path| {
            let text = fs::read_to_string(&path)
                .unwrap_or_else(|_| panic!("File at {path:?} should be valid"));
            (path, text)
        })
        .collect()
}

/// Collects paths to all `.php` files from `dir` in a sorted `Vec<PathBuf>`.
fn php_files_in_dir(dir: &Path) -> Vec<PathBuf> {
    let mut paths = fs::read_dir(dir)
        .unwrap()
        .map(|file| {
            let file = file?;
            let path = file.path();
            if path.extension().unwrap_or_default() == "php" {
                Ok(Some(path))
            } else {
                Ok(None)
            }
        })
        // Get rid of the `None`s
        .filter_map(|result: std::io::Result<_>| result.transpose())
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    paths.sort();

    // Check for duplicate numbers.
    let mut seen = IndexMap::new();
    let next_number = paths.len() + 1;
    for path in &paths {
        let file_name = path.file_name().unwrap().to_string_lossy();
        let (number, name): (usize, _) = match file_name.split_once('_') {
            Some((number, name)) => match number.parse() {
                Ok(number) => (number, name),
                Err(err) => {
                    panic!("Invalid test file name: {path:?} does not start with a number ({err})")
                }
            },
            None => panic!("Invalid test file name: {path:?} does not start with a number"),
        };

        if let Some(existing) = seen.get(&number) {
            let suggest = dir.join(format!("{next_number:03}_{name}"));
            panic!("Conflicting test file: {path:?} has the same number as {existing:?}. Suggested name: {suggest:?}");
        }

        seen.insert(number, path);
    }

    paths
}

/// PathBuf of test fixtures directory.
fn test_data_dir() -> PathBuf {
    project_root().join("php-parser/test_data")
}

/// Crate workspace root.
fn project_root() -> PathBuf {
    Path::new(
        &env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| env!("CARGO_MANIFEST_DIR").to_owned()),
    )
    .ancestors()
    .nth(1)
    .unwrap()
    .to_path_buf()
}