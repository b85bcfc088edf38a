//! Seed data loaded when the store holds no catalog yet

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::models::{Condition, Listing, ListingStatus, User};

/// Brands offered in the filter sidebar, most popular first
pub const PHONE_BRANDS: [&str; 10] = [
    "Apple", "Samsung", "Google", "OnePlus", "Xiaomi", "Vivo", "Nothing", "Oppo", "Motorola",
    "Realme",
];

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("Seed dates are valid calendar dates")
}

/// User every mock login resolves to, and the identity used in development
/// mode when no token is sent
pub fn default_user() -> User {
    User {
        id: "user1".to_string(),
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "+91 98765 43210".to_string(),
        location: "Mumbai, India".to_string(),
        avatar: Some("https://i.pravatar.cc/150?img=1".to_string()),
        created_at: date(2023, 1, 15),
    }
}

/// Sellers referenced by the seed listings
pub fn mock_users() -> Vec<User> {
    vec![
        User {
            id: "user1".to_string(),
            name: "Rahul Sharma".to_string(),
            email: "rahul@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            location: "Mumbai, Maharashtra".to_string(),
            avatar: Some("https://i.pravatar.cc/150?img=1".to_string()),
            created_at: date(2023, 1, 15),
        },
        User {
            id: "user2".to_string(),
            name: "Priya Singh".to_string(),
            email: "priya@example.com".to_string(),
            phone: "+91 87654 32109".to_string(),
            location: "Delhi, NCR".to_string(),
            avatar: Some("https://i.pravatar.cc/150?img=2".to_string()),
            created_at: date(2023, 2, 20),
        },
        User {
            id: "user3".to_string(),
            name: "Aman Patel".to_string(),
            email: "aman@example.com".to_string(),
            phone: "+91 76543 21098".to_string(),
            location: "Bangalore, Karnataka".to_string(),
            avatar: Some("https://i.pravatar.cc/150?img=3".to_string()),
            created_at: date(2023, 3, 5),
        },
    ]
}

struct SeedListing {
    id: &'static str,
    title: &'static str,
    brand: &'static str,
    model: &'static str,
    description: &'static str,
    condition: Condition,
    price: u64,
    original_price: u64,
    images: &'static [&'static str],
    seller_id: &'static str,
    location: &'static str,
    days_ago: i64,
}

const SEED_LISTINGS: [SeedListing; 8] = [
    SeedListing {
        id: "listing1",
        title: "iPhone 14 Pro Max in Perfect Condition",
        brand: "Apple",
        model: "iPhone 14 Pro Max",
        description: "Used for just 6 months. Comes with original box, charger, and earphones. No scratches or dents. Battery health is 98%. AppleCare+ valid until Dec 2023.",
        condition: Condition::LikeNew,
        price: 89999,
        original_price: 129900,
        images: &[
            "https://images.unsplash.com/photo-1663499482523-1c0c1bae4ce1?q=80&w=2070&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1663499482764-4e55ffedeecf?q=80&w=2070&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1663499482504-93cbcbcdb8d6?q=80&w=2070&auto=format&fit=crop",
        ],
        seller_id: "user1",
        location: "Mumbai, Maharashtra",
        days_ago: 3,
    },
    SeedListing {
        id: "listing2",
        title: "Samsung Galaxy S22 Ultra - 1 Year Old",
        brand: "Samsung",
        model: "Galaxy S22 Ultra",
        description: "In good condition with minor wear. 256GB storage, 12GB RAM. Includes all accessories and original box. Screen protector applied since day one. Mystic Black color.",
        condition: Condition::Good,
        price: 59999,
        original_price: 109999,
        images: &[
            "https://images.unsplash.com/photo-1644501675071-794dc9e81c61?q=80&w=2069&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1643855622693-e428ae6a6e3b?q=80&w=2069&auto=format&fit=crop",
        ],
        seller_id: "user2",
        location: "Delhi, NCR",
        days_ago: 5,
    },
    SeedListing {
        id: "listing3",
        title: "Google Pixel 7 - Like New",
        brand: "Google",
        model: "Pixel 7",
        description: "Purchased 3 months ago. In excellent condition with all original accessories. Obsidian Black, 128GB storage. Comes with case and screen protector. Still under warranty.",
        condition: Condition::LikeNew,
        price: 44999,
        original_price: 59999,
        images: &[
            "https://images.unsplash.com/photo-1667479559277-34a58f2c3a54?q=80&w=2069&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1668269125763-e304e7ecce2b?q=80&w=2070&auto=format&fit=crop",
        ],
        seller_id: "user3",
        location: "Bangalore, Karnataka",
        days_ago: 7,
    },
    SeedListing {
        id: "listing4",
        title: "OnePlus 10 Pro - Great Deal",
        brand: "OnePlus",
        model: "10 Pro",
        description: "8 months old. In good condition with minor scratches on the back. 256GB storage, 8GB RAM. Emerald Forest color. Includes charger and case.",
        condition: Condition::Good,
        price: 39999,
        original_price: 66999,
        images: &[
            "https://images.unsplash.com/photo-1646478704799-1ab1143c6193?q=80&w=2070&auto=format&fit=crop",
        ],
        seller_id: "user1",
        location: "Mumbai, Maharashtra",
        days_ago: 10,
    },
    SeedListing {
        id: "listing5",
        title: "iPhone 13 - 64GB - Rose Gold",
        brand: "Apple",
        model: "iPhone 13",
        description: "Used for 1 year. Minor scratches on the screen, otherwise good condition. Battery health at 92%. Includes charger and case.",
        condition: Condition::Good,
        price: 49999,
        original_price: 79900,
        images: &[
            "https://images.unsplash.com/photo-1632661674596-618e45e68d54?q=80&w=2055&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1603921326210-6edd2d60ca68?q=80&w=2071&auto=format&fit=crop",
        ],
        seller_id: "user2",
        location: "Delhi, NCR",
        days_ago: 12,
    },
    SeedListing {
        id: "listing6",
        title: "Xiaomi Redmi Note 12 Pro - Almost New",
        brand: "Xiaomi",
        model: "Redmi Note 12 Pro",
        description: "Used for just 2 months. Excellent condition with no scratches. 128GB storage, 8GB RAM. Frost Blue color. Includes original box and accessories.",
        condition: Condition::LikeNew,
        price: 19999,
        original_price: 25999,
        images: &[
            "https://images.unsplash.com/photo-1616348436168-de43ad0db179?q=80&w=1981&auto=format&fit=crop",
        ],
        seller_id: "user3",
        location: "Bangalore, Karnataka",
        days_ago: 15,
    },
    SeedListing {
        id: "listing7",
        title: "Vivo V25 Pro - Midnight Black",
        brand: "Vivo",
        model: "V25 Pro",
        description: "6 months old. In excellent condition with no visible wear. 128GB storage, 8GB RAM. Includes original box and fast charger.",
        condition: Condition::LikeNew,
        price: 27999,
        original_price: 35999,
        images: &[
            "https://images.unsplash.com/photo-1598327105666-5b89351aff97?q=80&w=2027&auto=format&fit=crop",
        ],
        seller_id: "user1",
        location: "Mumbai, Maharashtra",
        days_ago: 18,
    },
    SeedListing {
        id: "listing8",
        title: "Nothing Phone (1) - Transparent Back",
        brand: "Nothing",
        model: "Phone (1)",
        description: "Used for 9 months. Good condition with some minor scratches on the frame. 256GB storage, 12GB RAM. Unique transparent design with LED lights on the back.",
        condition: Condition::Good,
        price: 25999,
        original_price: 33999,
        images: &[
            "https://images.unsplash.com/photo-1662947995853-b2cca18f5192?q=80&w=1964&auto=format&fit=crop",
        ],
        seller_id: "user2",
        location: "Delhi, NCR",
        days_ago: 20,
    },
];

/// The eight demo listings, dated relative to `now`
pub fn mock_listings(now: DateTime<Utc>) -> Vec<Listing> {
    SEED_LISTINGS
        .iter()
        .map(|seed| {
            let created_at = now - Duration::days(seed.days_ago);
            Listing {
                id: seed.id.to_string(),
                title: seed.title.to_string(),
                brand: seed.brand.to_string(),
                model: seed.model.to_string(),
                description: seed.description.to_string(),
                condition: seed.condition,
                price: seed.price,
                original_price: Some(seed.original_price),
                images: seed.images.iter().map(|url| url.to_string()).collect(),
                seller_id: seed.seller_id.to_string(),
                location: seed.location.to_string(),
                status: ListingStatus::Active,
                created_at,
                updated_at: created_at,
            }
        })
        .collect()
}
