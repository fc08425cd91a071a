//! Demo dataset
//!
//! Everything goes through the regular service operations, so the seeded
//! groups hold exactly the quantities of their seeded orders.

use crate::core::error::MarketResult;
use crate::core::service::MarketService;
use crate::entities::group::NewGroup;
use crate::entities::identity::{Role, Signup};
use crate::entities::order::NewOrder;
use crate::entities::product::NewProduct;
use crate::entities::review::NewReview;
use chrono::{Duration, Utc};
use uuid::Uuid;

struct DemoActor {
    name: &'static str,
    email: &'static str,
    location: &'static str,
    latitude: f64,
    longitude: f64,
    description: Option<&'static str>,
}

const VENDORS: [DemoActor; 3] = [
    DemoActor {
        name: "Street Food Corner",
        email: "vendor1@example.com",
        location: "Downtown Market",
        latitude: 40.7128,
        longitude: -74.0060,
        description: None,
    },
    DemoActor {
        name: "Quick Bites",
        email: "vendor2@example.com",
        location: "Food Truck Plaza",
        latitude: 40.7589,
        longitude: -73.9851,
        description: None,
    },
    DemoActor {
        name: "Local Eats",
        email: "vendor3@example.com",
        location: "Central Park Area",
        latitude: 40.7831,
        longitude: -73.9712,
        description: None,
    },
];

const SUPPLIERS: [DemoActor; 3] = [
    DemoActor {
        name: "Fresh Produce Co",
        email: "supplier1@example.com",
        location: "Wholesale District",
        latitude: 40.7505,
        longitude: -73.9934,
        description: Some("Fresh fruits and vegetables supplier"),
    },
    DemoActor {
        name: "Meat & More",
        email: "supplier2@example.com",
        location: "Industrial Area",
        latitude: 40.7282,
        longitude: -74.0776,
        description: Some("Quality meat and protein products"),
    },
    DemoActor {
        name: "Dairy Delights",
        email: "supplier3@example.com",
        location: "Warehouse Zone",
        latitude: 40.6892,
        longitude: -74.0445,
        description: Some("Fresh dairy products and beverages"),
    },
];

/// (name, description, price, unit, min_quantity, supplier index)
const PRODUCTS: [(&str, &str, f64, &str, u32, usize); 5] = [
    ("Fresh Tomatoes", "Organic red tomatoes", 2.50, "kg", 5, 0),
    ("Ground Beef", "Premium ground beef", 8.99, "kg", 2, 1),
    ("Whole Milk", "Fresh whole milk", 3.25, "liter", 10, 2),
    ("Bell Peppers", "Mixed color bell peppers", 4.00, "kg", 3, 0),
    ("Chicken Breast", "Boneless chicken breast", 12.99, "kg", 2, 1),
];

/// (name, description, target, price_per_unit, deadline in days, product index, creator index)
const GROUPS: [(&str, &str, u32, f64, i64, usize, usize); 3] = [
    ("Tomato Bulk Buy", "Group buy for fresh tomatoes", 50, 2.25, 3, 0, 0),
    ("Meat Monday", "Weekly meat group purchase", 20, 8.50, 1, 1, 1),
    ("Dairy Collective", "Bulk dairy products", 100, 3.00, 2, 2, 2),
];

/// (quantity, vendor index, group index)
const ORDERS: [(u32, usize, usize); 4] = [(5, 0, 0), (3, 1, 1), (15, 2, 2), (10, 0, 0)];

/// (rating, comment, vendor index, supplier index)
const REVIEWS: [(u8, &str, usize, usize); 3] = [
    (5, "Excellent quality products!", 0, 0),
    (4, "Good service, fast delivery", 1, 1),
    (5, "Always fresh and reliable", 2, 2),
];

async fn register_all(
    service: &MarketService,
    actors: &[DemoActor],
    role: Role,
) -> MarketResult<Vec<Uuid>> {
    let mut ids = Vec::with_capacity(actors.len());
    for actor in actors {
        let identity = service
            .register_identity(Signup {
                email: actor.email.to_string(),
                role: Some(role),
                user_type: None,
                name: actor.name.to_string(),
                phone: None,
                location: Some(actor.location.to_string()),
                latitude: Some(actor.latitude),
                longitude: Some(actor.longitude),
                description: actor.description.map(str::to_string),
            })
            .await?;
        ids.push(identity.id);
    }
    Ok(ids)
}

/// Load the demo dataset into an empty store.
///
/// Returns `false` without writing anything when vendors already exist.
pub async fn seed_demo_data(service: &MarketService) -> MarketResult<bool> {
    if !service.read().await?.tables().vendors.is_empty() {
        tracing::info!("store already populated, skipping demo data");
        return Ok(false);
    }

    let vendors = register_all(service, &VENDORS, Role::Vendor).await?;
    let suppliers = register_all(service, &SUPPLIERS, Role::Supplier).await?;

    let mut products = Vec::with_capacity(PRODUCTS.len());
    for (name, description, price, unit, min_quantity, supplier) in PRODUCTS {
        let id = service
            .create_product(NewProduct {
                name: name.to_string(),
                description: Some(description.to_string()),
                price,
                unit: Some(unit.to_string()),
                min_quantity: Some(min_quantity),
                supplier_id: suppliers[supplier],
            })
            .await?;
        products.push(id);
    }

    let now = Utc::now();
    let mut groups = Vec::with_capacity(GROUPS.len());
    for (name, description, target, price_per_unit, days, product, creator) in GROUPS {
        let id = service
            .create_group(NewGroup {
                name: name.to_string(),
                description: Some(description.to_string()),
                target_quantity: target,
                price_per_unit,
                product_id: products[product],
                created_by: vendors[creator],
                deadline: Some(now + Duration::days(days)),
            })
            .await?;
        groups.push(id);
    }

    for (quantity, vendor, group) in ORDERS {
        service
            .place_order(NewOrder {
                quantity,
                vendor_id: vendors[vendor],
                group_id: groups[group],
                total_price: None,
            })
            .await?;
    }

    for (rating, comment, vendor, supplier) in REVIEWS {
        service
            .submit_review(NewReview {
                rating,
                comment: Some(comment.to_string()),
                vendor_id: vendors[vendor],
                supplier_id: suppliers[supplier],
            })
            .await?;
    }

    tracing::info!(
        vendors = vendors.len(),
        suppliers = suppliers.len(),
        products = products.len(),
        groups = groups.len(),
        orders = ORDERS.len(),
        reviews = REVIEWS.len(),
        "demo data seeded"
    );
    Ok(true)
}
