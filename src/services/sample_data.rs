//! Built-in demo dataset served by the dashboard.
//!
//! Timestamps are relative to the moment the catalog is built so the
//! "last scanned" and alert ages always look recent.

use chrono::{DateTime, Duration, Utc};

use crate::models::alert::{AlertSeverity, AlertStatus, PriceAlert};
use crate::models::product::{PricePoint, Product};
use crate::models::simulation::{HttpMethod, Parameter, SimulationResult};
use crate::models::vulnerability::{
    AttackVector, VulnerabilityReport, VulnerabilitySeverity, VulnerabilityStatus,
};
use crate::models::website::{ScanFrequency, Website, WebsiteStatus};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

pub fn websites(now: DateTime<Utc>) -> Vec<Website> {
    let site = |id: &str,
                url: &str,
                name: &str,
                ago: Duration,
                status: WebsiteStatus,
                product_count: u32| Website {
        id: id.to_string(),
        url: url.to_string(),
        name: name.to_string(),
        last_scanned: now - ago,
        status,
        product_count,
        scan_frequency: ScanFrequency::Hourly,
    };

    vec![
        site(
            "w1",
            "https://electronics-store.example.com",
            "ElectroTech",
            Duration::minutes(30),
            WebsiteStatus::Active,
            124,
        ),
        site(
            "w2",
            "https://fashion-boutique.example.com",
            "Fashion Boutique",
            Duration::hours(2),
            WebsiteStatus::Active,
            87,
        ),
        site(
            "w3",
            "https://home-goods.example.com",
            "Home Essentials",
            Duration::hours(6),
            WebsiteStatus::Paused,
            203,
        ),
        site(
            "w4",
            "https://gadget-world.example.com",
            "Gadget World",
            Duration::hours(12),
            WebsiteStatus::Error,
            45,
        ),
    ]
}

fn history(now: DateTime<Utc>, points: &[(Duration, f64)]) -> Vec<PricePoint> {
    points
        .iter()
        .map(|(ago, price)| PricePoint {
            date: now - *ago,
            price: *price,
        })
        .collect()
}

pub fn products(now: DateTime<Utc>) -> Vec<Product> {
    vec![
        Product {
            id: "p1".to_string(),
            website_id: "w1".to_string(),
            name: "Ultra HD Smart TV 55\"".to_string(),
            current_price: 499.99,
            original_price: 799.99,
            discount_percentage: 37.5,
            currency: "USD".to_string(),
            last_updated: now - Duration::minutes(45),
            price_history: history(
                now,
                &[
                    (Duration::days(7), 799.99),
                    (Duration::days(5), 749.99),
                    (Duration::days(3), 699.99),
                    (Duration::days(1), 599.99),
                    (Duration::minutes(45), 499.99),
                ],
            ),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            url: "https://electronics-store.example.com/products/ultra-hd-smart-tv-55".to_string(),
        },
        Product {
            id: "p2".to_string(),
            website_id: "w1".to_string(),
            name: "Noise Cancelling Headphones".to_string(),
            current_price: 149.99,
            original_price: 249.99,
            discount_percentage: 40.0,
            currency: "USD".to_string(),
            last_updated: now - Duration::hours(2),
            price_history: history(
                now,
                &[
                    (Duration::days(10), 249.99),
                    (Duration::days(7), 229.99),
                    (Duration::days(4), 199.99),
                    (Duration::hours(2), 149.99),
                ],
            ),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            url: "https://electronics-store.example.com/products/noise-cancelling-headphones"
                .to_string(),
        },
        Product {
            id: "p3".to_string(),
            website_id: "w2".to_string(),
            name: "Designer Handbag".to_string(),
            current_price: 89.99,
            original_price: 199.99,
            discount_percentage: 55.0,
            currency: "USD".to_string(),
            last_updated: now - Duration::hours(5),
            price_history: history(
                now,
                &[
                    (Duration::days(14), 199.99),
                    (Duration::days(10), 179.99),
                    (Duration::days(7), 149.99),
                    (Duration::hours(5), 89.99),
                ],
            ),
            image_url: PLACEHOLDER_IMAGE.to_string(),
            url: "https://fashion-boutique.example.com/products/designer-handbag".to_string(),
        },
    ]
}

pub fn alerts(now: DateTime<Utc>) -> Vec<PriceAlert> {
    let alert = |id: &str,
                 product_id: &str,
                 product_name: &str,
                 website_name: &str,
                 prices: (f64, f64, f64),
                 ago: Duration,
                 severity: AlertSeverity,
                 status: AlertStatus| PriceAlert {
        id: id.to_string(),
        product_id: product_id.to_string(),
        product_name: product_name.to_string(),
        website_name: website_name.to_string(),
        previous_price: prices.0,
        current_price: prices.1,
        change_percentage: prices.2,
        currency: "USD".to_string(),
        timestamp: now - ago,
        severity,
        image_url: PLACEHOLDER_IMAGE.to_string(),
        status,
    };

    vec![
        alert(
            "a1",
            "p1",
            "Ultra HD Smart TV 55\"",
            "ElectroTech",
            (599.99, 499.99, 16.67),
            Duration::minutes(45),
            AlertSeverity::Medium,
            AlertStatus::New,
        ),
        alert(
            "a2",
            "p2",
            "Noise Cancelling Headphones",
            "ElectroTech",
            (199.99, 149.99, 25.0),
            Duration::hours(2),
            AlertSeverity::Medium,
            AlertStatus::Reviewing,
        ),
        alert(
            "a3",
            "p3",
            "Designer Handbag",
            "Fashion Boutique",
            (149.99, 89.99, 40.0),
            Duration::hours(5),
            AlertSeverity::High,
            AlertStatus::New,
        ),
    ]
}

fn steps(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn vulnerabilities(now: DateTime<Utc>) -> Vec<VulnerabilityReport> {
    vec![
        VulnerabilityReport {
            id: "v1".to_string(),
            website_id: "w1".to_string(),
            website_name: "ElectroTech".to_string(),
            attack_vector: AttackVector::ParameterTampering,
            description:
                "Price parameter in checkout request can be manipulated to lower the total"
                    .to_string(),
            severity: VulnerabilitySeverity::Critical,
            status: VulnerabilityStatus::Open,
            date_discovered: now - Duration::days(2),
            date_resolved: None,
            steps: steps(&[
                "Add product to cart",
                "Proceed to checkout page",
                "Intercept the final payment request",
                "Modify the 'total_price' parameter",
                "Complete the payment with reduced amount",
            ]),
        },
        VulnerabilityReport {
            id: "v2".to_string(),
            website_id: "w2".to_string(),
            website_name: "Fashion Boutique".to_string(),
            attack_vector: AttackVector::CouponStacking,
            description: "Multiple discount coupons can be applied sequentially".to_string(),
            severity: VulnerabilitySeverity::High,
            status: VulnerabilityStatus::InProgress,
            date_discovered: now - Duration::days(5),
            date_resolved: None,
            steps: steps(&[
                "Add product to cart",
                "Apply first discount coupon",
                "Record new total price",
                "Apply second discount coupon",
                "Complete checkout with stacked discounts",
            ]),
        },
        VulnerabilityReport {
            id: "v3".to_string(),
            website_id: "w1".to_string(),
            website_name: "ElectroTech".to_string(),
            attack_vector: AttackVector::HiddenFieldModification,
            description: "Hidden form field contains the product price which can be modified"
                .to_string(),
            severity: VulnerabilitySeverity::Medium,
            status: VulnerabilityStatus::Resolved,
            date_discovered: now - Duration::days(10),
            date_resolved: Some(now - Duration::days(1)),
            steps: steps(&[
                "View product page source code",
                "Identify hidden input field with price data",
                "Modify the value using browser developer tools",
                "Add product to cart",
                "Complete checkout with modified price",
            ]),
        },
    ]
}

/// Previously recorded runs shown in the simulation history.
pub fn simulation_history(now: DateTime<Utc>) -> Vec<SimulationResult> {
    vec![
        SimulationResult {
            id: "as1".to_string(),
            website_id: "w1".to_string(),
            target_endpoint: "/api/checkout/process".to_string(),
            method: HttpMethod::Post,
            parameters: vec![
                Parameter::new("product_id", "12345", false),
                Parameter::new("quantity", "1", false),
                Parameter::new("price", "19.99", true),
                Parameter::new("total", "19.99", true),
            ],
            success: true,
            response_code: 200,
            response_data:
                r#"{"status":"success","order_id":"ORD-7890","total_charged":"19.99"}"#.to_string(),
            timestamp: now - Duration::days(3),
        },
        SimulationResult {
            id: "as2".to_string(),
            website_id: "w2".to_string(),
            target_endpoint: "/api/cart/apply-discount".to_string(),
            method: HttpMethod::Post,
            parameters: vec![
                Parameter::new("cart_id", "cart-567", false),
                Parameter::new("discount_code", "SUMMER20%OFF", true),
                Parameter::new("apply_multiple", "true", true),
            ],
            success: true,
            response_code: 200,
            response_data:
                r#"{"status":"success","discount_applied":"40%","new_total":"59.99"}"#.to_string(),
            timestamp: now - Duration::days(4),
        },
        SimulationResult {
            id: "as3".to_string(),
            website_id: "w3".to_string(),
            target_endpoint: "/api/checkout/finalize".to_string(),
            method: HttpMethod::Put,
            parameters: vec![
                Parameter::new("order_id", "ORD-1234", false),
                Parameter::new("payment_status", "completed", false),
                Parameter::new("shipping_cost", "0", true),
            ],
            success: false,
            response_code: 403,
            response_data: r#"{"status":"error","message":"Server-side validation failed. Tampering detected."}"#
                .to_string(),
            timestamp: now - Duration::days(2),
        },
    ]
}
