//! Sample copy and imagery for the site.

use crate::config::{
    CONTACT_EMAIL, CONTACT_PHONE, CONTACT_PHONE_DISPLAY, INSTAGRAM_URL, WHATSAPP_GREETING, WHATSAPP_NUMBER,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub event: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TermsBlock {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: String,
}

pub const HERO_IMAGE_PORTRAIT: &str =
    "https://images.pexels.com/photos/1043471/pexels-photo-1043471.jpeg?auto=compress&cs=tinysrgb&w=600";
pub const CONTACT_IMAGE: &str =
    "https://images.pexels.com/photos/3993212/pexels-photo-3993212.jpeg?auto=compress&cs=tinysrgb&w=800";

pub const SERVICES: &[Service] = &[
    Service {
        name: "Bridal Makeup",
        icon: "👑",
        description: "Complete bridal look with trial session",
        features: &["Trial session included", "Long-lasting formula", "Touch-up kit provided", "Hair styling available"],
    },
    Service {
        name: "Special Events",
        icon: "✨",
        description: "Perfect for parties, galas, and celebrations",
        features: &["Custom look design", "Photo-ready finish", "Premium products", "Quick touch-ups"],
    },
    Service {
        name: "Editorial/Photoshoot",
        icon: "📷",
        description: "Professional makeup for photography and media",
        features: &["HD makeup techniques", "Multiple look changes", "Collaboration with photographers", "Portfolio building"],
    },
    Service {
        name: "Makeup Lessons",
        icon: "🎨",
        description: "Learn professional techniques and tips",
        features: &["Personalized instruction", "Product recommendations", "Technique practice", "Take-home guide"],
    },
];

pub const PORTFOLIO: &[PortfolioItem] = &[
    PortfolioItem {
        title: "Royal Bridal Elegance",
        category: "Bridal",
        description: "Traditional bridal makeup with gold accents and flawless finish",
        image: "https://images.pexels.com/photos/1043474/pexels-photo-1043474.jpeg?auto=compress&cs=tinysrgb&w=800",
        featured: true,
    },
    PortfolioItem {
        title: "Reception Glam",
        category: "Bridal",
        description: "Bold and glamorous bridal reception look with dramatic eyes",
        image: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=800",
        featured: true,
    },
    PortfolioItem {
        title: "Mehendi Ceremony",
        category: "Bridal",
        description: "Fresh and vibrant look for pre-wedding mehendi celebration",
        image: "https://images.pexels.com/photos/1036623/pexels-photo-1036623.jpeg?auto=compress&cs=tinysrgb&w=800",
        featured: true,
    },
    PortfolioItem {
        title: "Engagement Glow",
        category: "Special Event",
        description: "Romantic and radiant makeup for engagement ceremonies",
        image: "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=800",
        featured: false,
    },
    PortfolioItem {
        title: "Sangeet Night",
        category: "Special Event",
        description: "Festive and colorful look perfect for sangeet celebrations",
        image: "https://images.pexels.com/photos/1181690/pexels-photo-1181690.jpeg?auto=compress&cs=tinysrgb&w=800",
        featured: false,
    },
    PortfolioItem {
        title: "Cocktail Party Glam",
        category: "Special Event",
        description: "Sophisticated evening makeup for cocktail parties and events",
        image: "https://images.pexels.com/photos/1181677/pexels-photo-1181677.jpeg?auto=compress&cs=tinysrgb&w=800",
        featured: false,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        event: "Wedding Day",
        rating: 5,
        text: "Amita made me feel absolutely stunning on my wedding day. Her attention to detail and ability to enhance my natural beauty was incredible. I felt confident and beautiful all day long!",
        image: "https://images.pexels.com/photos/1181424/pexels-photo-1181424.jpeg?auto=compress&cs=tinysrgb&w=200",
    },
    Testimonial {
        name: "Emily Chen",
        event: "Photoshoot",
        rating: 5,
        text: "Working with Amita for my professional headshots was amazing. She understood exactly what I needed and created a look that was both professional and striking. Highly recommend!",
        image: "https://images.pexels.com/photos/1181519/pexels-photo-1181519.jpeg?auto=compress&cs=tinysrgb&w=200",
    },
    Testimonial {
        name: "Maria Rodriguez",
        event: "Special Event",
        rating: 5,
        text: "Amita transformed me for my anniversary celebration. Her expertise and professionalism are unmatched. I received so many compliments and felt absolutely radiant!",
        image: "https://images.pexels.com/photos/1181562/pexels-photo-1181562.jpeg?auto=compress&cs=tinysrgb&w=200",
    },
];

pub const STATS: &[Stat] = &[
    Stat { number: "500+", label: "Happy Clients", icon: "♥" },
    Stat { number: "200+", label: "Bridal Looks", icon: "👑" },
    Stat { number: "8+", label: "Years Experience", icon: "🏆" },
];

pub const TERMS: &[TermsBlock] = &[
    TermsBlock {
        heading: "Booking & Payment",
        items: &[
            "A 50% non-refundable deposit is required to secure your booking",
            "Final payment is due on the day of service",
            "Cancellations must be made 48 hours in advance for partial refund",
            "No-shows will forfeit the entire deposit",
        ],
    },
    TermsBlock {
        heading: "Service Guidelines",
        items: &[
            "Trial sessions are highly recommended for bridal services",
            "Please arrive with clean, moisturized skin",
            "Inform us of any allergies or skin sensitivities in advance",
            "Additional charges apply for services exceeding agreed time",
        ],
    },
    TermsBlock {
        heading: "Photography & Usage",
        items: &[
            "Photos may be taken for portfolio purposes unless declined",
            "Images may be used for marketing and social media promotion",
            "Client privacy and preferences are always respected",
        ],
    },
];

pub fn featured_portfolio() -> impl Iterator<Item = &'static PortfolioItem> {
    PORTFOLIO.iter().filter(|item| item.featured)
}

pub fn additional_portfolio() -> impl Iterator<Item = &'static PortfolioItem> {
    PORTFOLIO.iter().filter(|item| !item.featured)
}

pub fn whatsapp_link() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(WHATSAPP_GREETING)
    )
}

pub fn contact_channels() -> Vec<ContactChannel> {
    vec![
        ContactChannel {
            icon: "✉",
            label: "Email:",
            value: CONTACT_EMAIL,
            href: format!("mailto:{}", CONTACT_EMAIL),
        },
        ContactChannel {
            icon: "☎",
            label: "Phone:",
            value: CONTACT_PHONE_DISPLAY,
            href: format!("tel:{}", CONTACT_PHONE),
        },
        ContactChannel {
            icon: "📍",
            label: "Studio:",
            value: "Downtown Beauty District",
            href: "#".to_string(),
        },
        ContactChannel {
            icon: "🕒",
            label: "Hours:",
            value: "Mon-Sat: 9AM-7PM",
            href: "#".to_string(),
        },
    ]
}

/// Social profiles. Facebook and YouTube are still placeholders.
pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink { label: "Instagram", icon: "📸", href: INSTAGRAM_URL.to_string() },
        SocialLink { label: "Facebook", icon: "f", href: "#".to_string() },
        SocialLink { label: "YouTube", icon: "▶", href: "#".to_string() },
        SocialLink { label: "WhatsApp", icon: "💬", href: whatsapp_link() },
    ]
}

/// Round shortcuts pinned to the bottom-right corner: call, WhatsApp, Instagram.
pub fn floating_contacts() -> Vec<SocialLink> {
    vec![
        SocialLink { label: "Call Phone", icon: "☎", href: format!("tel:{}", CONTACT_PHONE) },
        SocialLink { label: "WhatsApp", icon: "💬", href: whatsapp_link() },
        SocialLink { label: "Instagram", icon: "📸", href: INSTAGRAM_URL.to_string() },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_shape() {
        assert_eq!(SERVICES.len(), 4);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(featured_portfolio().count(), 3);
        assert_eq!(additional_portfolio().count(), 3);
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn test_whatsapp_link_is_encoded() {
        let link = whatsapp_link();
        assert!(link.starts_with("https://wa.me/15551234567?text=Hi%20Amita%2C%20I%27d"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_contact_links() {
        let channels = contact_channels();
        assert_eq!(channels[0].href, "mailto:amita.kushwah@makeupstudio.com");
        assert_eq!(channels[1].href, "tel:+15551234567");
        let socials = social_links();
        assert_eq!(socials.last().map(|s| s.label), Some("WhatsApp"));
    }

    #[test]
    fn test_floating_contacts_reuse_contact_links() {
        let floating = floating_contacts();
        let labels: Vec<_> = floating.iter().map(|f| f.label).collect();
        assert_eq!(labels, vec!["Call Phone", "WhatsApp", "Instagram"]);
        assert_eq!(floating[0].href, "tel:+15551234567");
        assert_eq!(floating[1].href, whatsapp_link());
        assert_eq!(floating[2].href, social_links()[0].href);
        assert_eq!(floating[2].href, "https://instagram.com/amitamakeover");
    }
}
