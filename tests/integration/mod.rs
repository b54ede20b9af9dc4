// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod admin_test;
pub mod content_test;
pub mod culture_test;
pub mod health_check;
pub mod helpers;
pub mod media_test;
pub mod playlist_test;
pub mod settings_test;
pub mod visitor_test;
