/// Money saving tips shown on the dashboard.
pub static SAVING_TIPS: [&str; 5] = [
    "Set a realistic monthly budget",
    "Cook meals at home instead of eating out",
    "Use the 50/30/20 rule: 50% needs, 30% wants, 20% savings",
    "Track every expense, no matter how small",
    "Look for free entertainment options",
];
