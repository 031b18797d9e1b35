// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading the post collection and the deployment configuration.
//!
//! Both are JSON written by the page generator. A posts file is either a bare
//! array of posts or the page query shape `{ "allPosts": [...] }`.

use crate::config::IndexConfiguration;
use crate::error::LoadError;
use crate::types::Document;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum PostsFile {
    Bare(Vec<Document>),
    #[serde(rename_all = "camelCase")]
    PageQuery {
        all_posts: Vec<Document>,
    },
}

pub fn parse_posts(json: &str) -> Result<Vec<Document>, LoadError> {
    let file: PostsFile =
        serde_json::from_str(json).map_err(|source| LoadError::Json { what: "posts", source })?;
    Ok(match file {
        PostsFile::Bare(posts) => posts,
        PostsFile::PageQuery { all_posts } => all_posts,
    })
}

pub fn load_posts(path: impl AsRef<Path>) -> Result<Vec<Document>, LoadError> {
    parse_posts(&read(path.as_ref())?)
}

pub fn parse_config(json: &str) -> Result<IndexConfiguration, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Json {
        what: "configuration",
        source,
    })
}

pub fn load_config(path: impl AsRef<Path>) -> Result<IndexConfiguration, LoadError> {
    parse_config(&read(path.as_ref())?)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
