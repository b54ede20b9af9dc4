// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MediaUploadResponse {
    pub key: String,
    pub url: String,
    pub content_type: String,
    pub size: usize,
}

/// 读取到的媒体文件
#[derive(Debug)]
pub struct MediaContent {
    pub content_type: &'static str,
    pub data: Vec<u8>,
}
