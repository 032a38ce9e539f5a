// SPDX-License-Identifier: MIT

//!
//! The miscellaneous file browser listing
//!

use crate::PortfolioError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// File name of the file listing
pub const FILES_FILE_NAME: &str = "files.json";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Directory,
}

/// What sort of file an entry is.  Each category has its own icon and colour.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Html,
    Css,
    Js,
    Image,
    Data,
    Other,
}

impl FileCategory {
    pub fn icon(&self) -> &'static str {
        match self {
            FileCategory::Html => "📄",
            FileCategory::Css => "🎨",
            FileCategory::Js => "⚡",
            FileCategory::Image => "🖼️",
            FileCategory::Data => "📊",
            FileCategory::Other => "📁",
        }
    }

    /// CSS class used to colour the category badge
    pub fn colour_class(&self) -> &'static str {
        match self {
            FileCategory::Html => "text-orange-600",
            FileCategory::Css => "text-blue-600",
            FileCategory::Js => "text-yellow-600",
            FileCategory::Image => "text-green-600",
            FileCategory::Data => "text-purple-600",
            FileCategory::Other => "text-gray-600",
        }
    }
}

/// An entry in the file browser
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FileItem {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub category: FileCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FileItem {
    /// Whether the name or description contains the search term (ignoring
    /// case).  An empty term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self
                .description
                .as_ref()
                .is_some_and(|description| description.to_lowercase().contains(&term))
    }
}

/// Load the file listing from a JSON file
pub fn load_file_listing<P: AsRef<Path>>(path: P) -> Result<Vec<FileItem>, PortfolioError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// The files matching the search term and (if given) category
pub fn filter_files<'a>(
    files: &'a [FileItem],
    term: &str,
    category: Option<FileCategory>,
) -> Vec<&'a FileItem> {
    files
        .iter()
        .filter(|file| file.matches_search(term))
        .filter(|file| category.is_none_or(|category| file.category == category))
        .collect()
}

/// The categories used by the files, in the order first seen
pub fn file_categories(files: &[FileItem]) -> Vec<FileCategory> {
    let mut categories = Vec::new();
    for file in files {
        if !categories.contains(&file.category) {
            categories.push(file.category);
        }
    }
    categories
}
