//! Display copy for each landing page variant.
//!
//! Both variants render the same page and the same form controller; only the
//! text and a theme class differ.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use leads::Variant;

#[derive(Debug, PartialEq, Eq)]
pub struct IconText {
    pub icon: &'static str,
    pub text: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct BonusTier {
    pub deposit: &'static str,
    pub bonus: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Tile {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

/// All text for one variant.
#[derive(Debug, PartialEq, Eq)]
pub struct PageCopy {
    pub variant: Variant,
    /// Extra class on the page root, used for per-variant accents.
    pub theme_class: &'static str,
    pub page_title: &'static str,
    pub brand: &'static str,
    pub brand_tag: &'static str,
    pub nav_cta: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub features: &'static [IconText],
    pub bonus_heading: &'static str,
    pub bonus_tiers: &'static [BonusTier],
    pub form_heading: &'static str,
    pub form_subheading: &'static str,
    pub submit_idle: &'static str,
    pub submit_busy: &'static str,
    pub consent: &'static str,
    pub success_title: &'static str,
    pub success_body: &'static str,
    pub steps_heading: &'static str,
    pub steps_subheading: &'static str,
    pub steps: &'static [Tile],
    pub games_heading: &'static str,
    pub games: &'static [Tile],
    pub perks_heading: &'static str,
    pub perks: &'static [Tile],
    pub cta_heading: &'static str,
    pub cta_body: &'static str,
    pub footer_brand: &'static str,
    pub footer_notice: &'static str,
}

const BONUS_TIERS: &[BonusTier] = &[
    BonusTier { deposit: "$20", bonus: "$5" },
    BonusTier { deposit: "$50", bonus: "$10" },
    BonusTier { deposit: "$100", bonus: "$20" },
];

const STEPS: &[Tile] = &[
    Tile { icon: "📝", title: "Sign Up", desc: "Create your account in 60 seconds" },
    Tile { icon: "💳", title: "Deposit", desc: "Add funds and claim your bonus" },
    Tile { icon: "🎮", title: "Play", desc: "Start winning at your favorite games" },
];

const PERKS: &[Tile] = &[
    Tile { icon: "🎁", title: "Daily Rewards", desc: "Login bonuses every day" },
    Tile { icon: "🏆", title: "Tournaments", desc: "Compete for big prizes" },
    Tile { icon: "⚡", title: "Fast Payouts", desc: "Withdraw in minutes" },
];

const FOOTER_NOTICE: &str = "Gambling can be addictive. Play responsibly. Must be 18 years or older to play.";
const CONSENT: &str = "By signing up, you confirm you are 18+ and agree to our terms.";

pub static CLASSIC: PageCopy = PageCopy {
    variant: Variant::Classic,
    theme_class: "theme-classic",
    page_title: "Luxor Online Casino",
    brand: "LUXOR",
    brand_tag: "Online Casino",
    nav_cta: "Join Now",
    headline: "LUXOR",
    tagline: "Play your favorite casino games online. Slots, table games, and more - all from the comfort of home.",
    features: &[
        IconText { icon: "🎰", text: "100+ Premium Casino Games" },
        IconText { icon: "💰", text: "Generous Welcome Bonuses" },
        IconText { icon: "⚡", text: "Instant Deposits & Withdrawals" },
        IconText { icon: "🔒", text: "Secure & Licensed Platform" },
    ],
    bonus_heading: "Deposit Bonuses",
    bonus_tiers: BONUS_TIERS,
    form_heading: "Join Today",
    form_subheading: "Start playing in 60 seconds • 18+ only",
    submit_idle: "Start Playing Now 🎰",
    submit_busy: "Creating Account...",
    consent: CONSENT,
    success_title: "Welcome to Luxor!",
    success_body: "Your account is being created. You'll receive your credentials via SMS shortly.",
    steps_heading: "How It Works",
    steps_subheading: "Get started in 3 simple steps",
    steps: STEPS,
    games_heading: "Featured Games",
    games: &[
        Tile { icon: "🎰", title: "Slot Machines", desc: "Classic & Video Slots" },
        Tile { icon: "🃏", title: "Table Games", desc: "Blackjack, Roulette, Poker" },
        Tile { icon: "🎲", title: "Live Dealer", desc: "Real-time Casino Action" },
        Tile { icon: "🐉", title: "Dragon Games", desc: "Asian-themed High Stakes" },
        Tile { icon: "💎", title: "Jackpot Games", desc: "Progressive Mega Wins" },
        Tile { icon: "🎯", title: "Arcade Games", desc: "Fish Tables & More" },
    ],
    perks_heading: "Join Thousands of Winners",
    perks: PERKS,
    cta_heading: "Ready to Win?",
    cta_body: "Join now and claim your welcome bonus",
    footer_brand: "LUXOR ONLINE CASINO",
    footer_notice: FOOTER_NOTICE,
};

pub static ARCADE: PageCopy = PageCopy {
    variant: Variant::Arcade,
    theme_class: "theme-arcade",
    page_title: "Luxor Arcade",
    brand: "LUXOR",
    brand_tag: "Arcade",
    nav_cta: "Play Now",
    headline: "LUXOR ARCADE",
    tagline: "Fish tables, sweepstakes slots and skill games - play the arcade favorites online, any time.",
    features: &[
        IconText { icon: "🐟", text: "Fish Tables & Skill Games" },
        IconText { icon: "💰", text: "Bonus Credits on Every Deposit" },
        IconText { icon: "⚡", text: "Instant Deposits & Withdrawals" },
        IconText { icon: "🔒", text: "Secure & Licensed Platform" },
    ],
    bonus_heading: "Credit Bonuses",
    bonus_tiers: BONUS_TIERS,
    form_heading: "Claim Your Seat",
    form_subheading: "Start playing in 60 seconds • 18+ only",
    submit_idle: "Start Playing Now 🎮",
    submit_busy: "Setting Up Your Account...",
    consent: CONSENT,
    success_title: "Welcome to Luxor Arcade!",
    success_body: "Your account is being set up. You'll receive your login details via SMS shortly.",
    steps_heading: "How It Works",
    steps_subheading: "Get started in 3 simple steps",
    steps: STEPS,
    games_heading: "Arcade Favorites",
    games: &[
        Tile { icon: "🐟", title: "Fish Tables", desc: "Shoot, Catch & Win" },
        Tile { icon: "🎰", title: "Sweepstakes Slots", desc: "Classic Reels & Bonus Rounds" },
        Tile { icon: "🐉", title: "Dragon Games", desc: "Asian-themed High Stakes" },
        Tile { icon: "🎯", title: "Skill Games", desc: "Aim, Time & Score" },
        Tile { icon: "💎", title: "Jackpot Games", desc: "Progressive Mega Wins" },
        Tile { icon: "🃏", title: "Table Games", desc: "Blackjack, Roulette, Poker" },
    ],
    perks_heading: "Join Thousands of Players",
    perks: PERKS,
    cta_heading: "Ready to Play?",
    cta_body: "Join now and claim your bonus credits",
    footer_brand: "LUXOR ARCADE",
    footer_notice: FOOTER_NOTICE,
};

/// Copy for `variant`.
#[must_use]
pub fn copy_for(variant: Variant) -> &'static PageCopy {
    match variant {
        Variant::Classic => &CLASSIC,
        Variant::Arcade => &ARCADE,
    }
}
