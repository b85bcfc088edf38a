//! Static content for the "how it works" page

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub title: &'static str,
    pub summary: &'static str,
    pub for_sellers: &'static [Step],
    pub for_buyers: &'static [Step],
    pub safety_tips: &'static [&'static str],
    pub faqs: &'static [Faq],
}

pub const GUIDE: Guide = Guide {
    title: "How PhoneFlip Works",
    summary: "PhoneFlip makes buying and selling used phones simple, secure, and transparent.",
    for_sellers: &[
        Step {
            title: "Create Your Listing",
            description: "Sign up and create a detailed listing with photos, specifications, and the condition of your phone.",
            tips: &[
                "Add clear photos from multiple angles",
                "Mention any accessories included",
                "Be honest about the condition",
            ],
        },
        Step {
            title: "Set Your Price",
            description: "Pick your asking price. Adding the original price shows buyers how much they save.",
            tips: &[
                "Price according to condition",
                "Set a competitive price to sell faster",
                "Option to include original price for comparison",
            ],
        },
        Step {
            title: "Connect with Buyers",
            description: "Receive inquiries from interested buyers and arrange the sale.",
            tips: &[
                "Respond to inquiries promptly",
                "Negotiate with potential buyers",
                "Arrange safe meeting places for local transactions",
            ],
        },
    ],
    for_buyers: &[
        Step {
            title: "Find Your Phone",
            description: "Browse available listings using search and filters to find the right phone.",
            tips: &[
                "Filter by brand, condition, and price",
                "Compare multiple listings",
                "Add favorites to your wishlist",
            ],
        },
        Step {
            title: "Contact the Seller",
            description: "Reach out to the seller with any questions and arrange to purchase the phone.",
            tips: &[
                "Ask about the phone's history",
                "Verify details not mentioned in the listing",
                "Negotiate the price if needed",
            ],
        },
        Step {
            title: "Complete the Purchase",
            description: "Pay and receive your phone either through shipping or local pickup.",
            tips: &[
                "Inspect the phone upon receipt",
                "Test every function before paying in person",
            ],
        },
    ],
    safety_tips: &[
        "Always meet in public places for local transactions, like cafes or shopping malls.",
        "Verify the IMEI number before purchasing to ensure the phone isn't stolen.",
        "Test the phone thoroughly before making payment.",
        "Be cautious of deals that seem too good to be true.",
    ],
    faqs: &[
        Faq {
            question: "How do I know if a phone is in good condition?",
            answer: "Look for details in the listing about scratches, dents, and battery health. Ask the seller for additional photos if needed.",
        },
        Faq {
            question: "How do I verify the phone isn't stolen?",
            answer: "Dial *#06# on the phone to read its IMEI and check it against an online IMEI verification service.",
        },
        Faq {
            question: "How does shipping work?",
            answer: "Sellers choose between shipping and local pickup. Shipped phones come with tracking information.",
        },
    ],
};
