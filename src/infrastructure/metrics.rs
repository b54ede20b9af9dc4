// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::info;

pub const ADMIN_LOGINS_TOTAL: &str = "admin_logins_total";
pub const VISITS_RECORDED_TOTAL: &str = "visits_recorded_total";
pub const MEDIA_UPLOADS_TOTAL: &str = "media_uploads_total";
pub const ENTRIES_CREATED_TOTAL: &str = "entries_created_total";

/// 启动 Prometheus 导出器
///
/// 未启用时不安装记录器，所有计数器调用都是空操作
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.address.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::warn!("Invalid metrics address {}: {}", settings.address, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return;
    }

    describe_metrics();
    info!("Metrics exporter listening on {}", addr);
}

fn describe_metrics() {
    describe_counter!(ADMIN_LOGINS_TOTAL, "Admin login attempts by outcome");
    describe_counter!(VISITS_RECORDED_TOTAL, "Topic visits recorded for learners");
    describe_counter!(MEDIA_UPLOADS_TOTAL, "Media files uploaded by kind");
    describe_counter!(ENTRIES_CREATED_TOTAL, "Dictionary entries created");
}

pub fn record_login(outcome: &'static str) {
    counter!(ADMIN_LOGINS_TOTAL, "outcome" => outcome).increment(1);
}

pub fn record_visit() {
    counter!(VISITS_RECORDED_TOTAL).increment(1);
}

pub fn record_media_upload(kind: &'static str) {
    counter!(MEDIA_UPLOADS_TOTAL, "kind" => kind).increment(1);
}

pub fn record_entry_created() {
    counter!(ENTRIES_CREATED_TOTAL).increment(1);
}
