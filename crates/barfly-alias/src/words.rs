//! Word catalogs the alias pools are built from.
//!
//! Each category pairs 100 adjectives with 100 nouns. The lists are
//! static data; changing any entry changes every pool in that category.

/// Dating adjectives.
pub(crate) const DATING_ADJECTIVES: [&str; 100] = [
    "Adoring", "Affectionate", "Alluring", "Amorous", "Angel", "Ardent", "Blissful", "Bold",
    "Bright", "Captivating", "Charming", "Cheeky", "Cherished", "Cozy", "Crushworthy", "Cupid",
    "Dazzling", "Darling", "Dear", "Dreamy", "Electric", "Enchanted", "Endearing", "Enticing",
    "Eternal", "Flirty", "Fond", "Fox", "Giddy", "Golden", "Heartfelt", "Honey",
    "Hot", "Huggable", "InSync", "Irresistible", "Joyful", "Kissable", "Lively", "Lovely",
    "Loyal", "Magnetic", "Moonlit", "Nifty", "Openhearted", "Passionate", "Playful", "Precious",
    "Pure", "Radiant", "Romantic", "Rosy", "Smitten", "Snuggly", "Sparkling", "Spicy",
    "Starry", "Steady", "Sugar", "Sweet", "Tender", "True", "Unforgettable", "Velvet",
    "Warm", "Wholesome", "Witty", "Wonder", "Yearning", "Zesty", "Blushing", "Butterfly",
    "Candlelit", "Caring", "Chivalrous", "Cuddly", "Devoted", "Fated", "Gentle", "Glowing",
    "Handsome", "Lovestruck", "Mellow", "Muse", "New", "Petal", "Poetic", "Rendezvous",
    "Serene", "Stolen", "Sunlit", "Thrilling", "Timeless", "Twinkling", "Valentine", "Vivid",
    "Wildhearted", "Winsome", "Swoon", "Beloved",
];

/// Dating nouns.
pub(crate) const DATING_NOUNS: [&str; 100] = [
    "Arrow", "Aura", "Bliss", "Bouquet", "Butterfly", "Candle", "Charm", "Chemistry",
    "Cherub", "Crush", "Cupid", "Daisy", "Date", "Desire", "Dream", "Embrace",
    "EverAfter", "Flame", "Flower", "Fortune", "Garden", "Glimmer", "Heart", "Heartbeat",
    "Honeybee", "Hug", "Jewel", "Kiss", "Lantern", "Love", "Lullaby", "Magic",
    "Melody", "Moon", "Muse", "Necklace", "Night", "Note", "Ocean", "Orbit",
    "Promise", "Pulse", "Rainbow", "Rendezvous", "Ring", "Rose", "Serenade", "Shimmer",
    "Smile", "Spark", "Starlight", "Story", "Swoon", "Sweetheart", "Symphony", "Tender",
    "Thread", "Touch", "Treasure", "Truth", "Valentine", "Vibe", "Whisper", "Wink",
    "Wonder", "Boulevard", "Coffee", "Conversation", "Dance", "Destiny", "Dimpler", "Firework",
    "FirstDate", "Glow", "Harmony", "HighFive", "InsideJoke", "Laugh", "Memory", "Moment",
    "Moonbeam", "MuseNote", "Outing", "Picnic", "Playlist", "Poem", "Postcard", "Reel",
    "Snap", "Sunset", "Text", "Toast", "Together", "Vow", "Warmth", "Weekend",
    "Wine", "Wish", "Handhold", "Soulmate",
];

/// Networking adjectives.
pub(crate) const NETWORKING_ADJECTIVES: [&str; 100] = [
    "Agile", "Analytical", "Apex", "Astute", "Bold", "Branded", "Builder", "Calibrated",
    "Capable", "Clever", "ClientReady", "Collaborative", "Connected", "Creative", "Credible", "Crisp",
    "DataDriven", "Decisive", "Dedicated", "Diligent", "Direct", "Driven", "Dynamic", "Efficient",
    "Elevated", "Empowered", "Engineered", "Evolving", "Expert", "Focused", "Forward", "FutureReady",
    "Global", "GoalOriented", "Grounded", "Growth", "Hardworking", "HighImpact", "Honed", "Insightful",
    "Innovative", "Integrated", "Intentional", "Keen", "Leader", "Lean", "LevelUp", "Mentor",
    "Modern", "Motivated", "Networked", "NextGen", "Operational", "Optimized", "Organized", "Outcome",
    "Partner", "Performance", "Pioneering", "Polished", "Practical", "Precision", "Prepared", "Proactive",
    "Productive", "Professional", "Progressive", "Project", "Quality", "Reliable", "Resilient", "Resourceful",
    "Results", "Savvy", "Scalable", "Sharp", "Skilled", "Solution", "Strategic", "Streamlined",
    "Structured", "Synergy", "Systems", "Tactical", "Talent", "Team", "Technical", "Timely",
    "Trusted", "Vision", "Visionary", "Workflow", "Value", "Accurate", "Catalyst", "Consultative",
    "Executive", "Founder", "Managerial", "Principal",
];

/// Networking nouns.
pub(crate) const NETWORKING_NOUNS: [&str; 100] = [
    "Advisor", "Analyst", "Architect", "Associate", "Builder", "Catalyst", "CFO", "Channel",
    "Coach", "Collaborator", "Connector", "Consultant", "Creator", "DecisionMaker", "Designer", "Director",
    "Engineer", "Entrepreneur", "Executive", "Founder", "Growth", "Guide", "HiringLead", "Innovator",
    "Investor", "Leader", "Liaison", "Manager", "Mentor", "Operator", "Owner", "Partner",
    "Planner", "Producer", "Product", "Program", "ProjectLead", "Prospect", "Recruiter", "Researcher",
    "Sales", "Scout", "Specialist", "Strategist", "Talent", "TeamLead", "Technologist", "Thinker",
    "Trailblazer", "Visionary", "Client", "Customer", "Pipeline", "Network", "Opportunity", "Workshop",
    "Pitch", "Panel", "Meetup", "Summit", "Roadmap", "Launch", "Sprint", "Brief",
    "Stack", "Studio", "Agency", "Firm", "Venture", "Fund", "Deal", "Contract",
    "Partnership", "Referral", "Collab", "Build", "Hire", "Role", "Seat", "Desk",
    "StudioLead", "Ops", "PM", "CTO", "COO", "CEO", "Board", "Angel",
    "Vendor", "Supplier", "Account", "Portfolio", "CaseStudy", "Benchmark", "Insight", "Report",
    "Demo", "Prototype", "Blueprint", "Framework",
];
