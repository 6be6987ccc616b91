use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Industry taxonomy. Declaration order is the tie-break order during
/// classification: when two industries match the same number of keywords,
/// the one listed first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    General,
    Technology,
    Ecommerce,
    Finance,
    Healthcare,
    Education,
    Legal,
    Creative,
    Beauty,
    Restaurant,
    Travel,
}

impl Industry {
    pub const ALL: [Industry; 11] = [
        Industry::General,
        Industry::Technology,
        Industry::Ecommerce,
        Industry::Finance,
        Industry::Healthcare,
        Industry::Education,
        Industry::Legal,
        Industry::Creative,
        Industry::Beauty,
        Industry::Restaurant,
        Industry::Travel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Technology => "technology",
            Self::Ecommerce => "ecommerce",
            Self::Finance => "finance",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::Legal => "legal",
            Self::Creative => "creative",
            Self::Beauty => "beauty",
            Self::Restaurant => "restaurant",
            Self::Travel => "travel",
        }
    }

    /// Keyword list matched against the normalized business description.
    /// English and Japanese terms; the product serves both markets.
    /// General carries no keywords: it is the absence of a match.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::General => &[],
            Self::Technology => &[
                "software",
                "saas",
                "startup",
                "tech",
                "app",
                "digital",
                "cloud",
                "テクノロジー",
                "ソフトウェア",
                "アプリ",
                "システム",
            ],
            Self::Ecommerce => &[
                "shop",
                "store",
                "ecommerce",
                "e-commerce",
                "retail",
                "marketplace",
                "通販",
                "ショップ",
                "オンラインショップ",
                "オンラインストア",
                "ecサイト",
                "販売",
            ],
            Self::Finance => &[
                "finance",
                "bank",
                "investment",
                "insurance",
                "loan",
                "fintech",
                "金融",
                "銀行",
                "投資",
                "保険",
                "ローン",
            ],
            Self::Healthcare => &[
                "health",
                "medical",
                "clinic",
                "hospital",
                "wellness",
                "dental",
                "医療",
                "クリニック",
                "病院",
                "健康",
                "歯科",
            ],
            Self::Education => &[
                "education",
                "school",
                "course",
                "learning",
                "tutoring",
                "academy",
                "教育",
                "学校",
                "講座",
                "スクール",
                "塾",
            ],
            Self::Legal => &[
                "law firm",
                "legal",
                "attorney",
                "lawyer",
                "法律",
                "弁護士",
                "法務",
                "司法書士",
            ],
            Self::Creative => &[
                "design studio",
                "creative",
                "agency",
                "portfolio",
                "photography",
                "デザイン",
                "クリエイティブ",
                "制作",
                "写真",
            ],
            Self::Beauty => &[
                "beauty",
                "salon",
                "spa",
                "cosmetic",
                "hair",
                "美容",
                "サロン",
                "エステ",
                "コスメ",
                "ネイル",
            ],
            Self::Restaurant => &[
                "restaurant",
                "cafe",
                "dining",
                "bakery",
                "food",
                "レストラン",
                "カフェ",
                "飲食",
                "食品",
                "グルメ",
            ],
            Self::Travel => &[
                "travel",
                "hotel",
                "tour",
                "tourism",
                "vacation",
                "旅行",
                "ホテル",
                "観光",
                "ツアー",
            ],
        }
    }
}

impl Default for Industry {
    fn default() -> Self {
        Self::General
    }
}

/// Business goal taxonomy. Wire labels are spaced lowercase, fixed by the
/// external contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum BusinessGoal {
    #[serde(rename = "conversion improvement")]
    ConversionImprovement,
    #[serde(rename = "sales increase")]
    SalesIncrease,
    #[serde(rename = "lead generation")]
    LeadGeneration,
    #[serde(rename = "brand awareness")]
    BrandAwareness,
    #[serde(rename = "information provision")]
    InformationProvision,
    #[serde(rename = "hiring")]
    Hiring,
    #[serde(rename = "customer engagement")]
    CustomerEngagement,
}

impl BusinessGoal {
    pub const ALL: [BusinessGoal; 7] = [
        BusinessGoal::ConversionImprovement,
        BusinessGoal::SalesIncrease,
        BusinessGoal::LeadGeneration,
        BusinessGoal::BrandAwareness,
        BusinessGoal::InformationProvision,
        BusinessGoal::Hiring,
        BusinessGoal::CustomerEngagement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ConversionImprovement => "conversion improvement",
            Self::SalesIncrease => "sales increase",
            Self::LeadGeneration => "lead generation",
            Self::BrandAwareness => "brand awareness",
            Self::InformationProvision => "information provision",
            Self::Hiring => "hiring",
            Self::CustomerEngagement => "customer engagement",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::ConversionImprovement => &["conversion", "コンバージョン", "成約"],
            Self::SalesIncrease => &["sales", "sell", "revenue", "売上", "販売促進", "購入"],
            Self::LeadGeneration => &[
                "lead",
                "inquiry",
                "signup",
                "sign up",
                "リード",
                "問い合わせ",
                "資料請求",
                "見込み客",
            ],
            Self::BrandAwareness => &[
                "brand",
                "awareness",
                "recognition",
                "ブランド",
                "認知",
                "知名度",
            ],
            Self::InformationProvision => &[
                "information",
                "guide",
                "resource",
                "情報提供",
                "案内",
                "紹介",
            ],
            Self::Hiring => &[
                "hiring",
                "recruit",
                "careers",
                "join our team",
                "採用",
                "求人",
                "募集",
            ],
            Self::CustomerEngagement => &[
                "engagement",
                "community",
                "membership",
                "loyalty",
                "会員",
                "コミュニティ",
                "ファン",
            ],
        }
    }
}

impl Default for BusinessGoal {
    fn default() -> Self {
        Self::ConversionImprovement
    }
}

/// Copy tone inferred from the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Friendly,
    Casual,
    Premium,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Professional,
        Tone::Friendly,
        Tone::Casual,
        Tone::Premium,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Professional => "professional",
            Self::Friendly => "friendly",
            Self::Casual => "casual",
            Self::Premium => "premium",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Professional => &[
                "professional",
                "trusted",
                "reliable",
                "プロフェッショナル",
                "信頼",
            ],
            Self::Friendly => &[
                "friendly",
                "welcoming",
                "warm",
                "アットホーム",
                "親しみ",
                "フレンドリー",
            ],
            Self::Casual => &["casual", "fun", "playful", "カジュアル", "気軽", "楽しい"],
            Self::Premium => &[
                "premium",
                "luxury",
                "exclusive",
                "high-end",
                "プレミアム",
                "高級",
                "上質",
                "ラグジュアリー",
            ],
        }
    }
}

impl Default for Tone {
    fn default() -> Self {
        Self::Professional
    }
}

/// Structured business profile inferred from a freeform description.
/// Computed once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessContext {
    pub industry: Industry,
    pub target_audience: String,
    pub business_goal: BusinessGoal,
    pub competitive_advantage: Vec<String>,
    pub tone: Tone,
}

impl BusinessContext {
    pub const DEFAULT_AUDIENCE: &'static str = "general users";
}

impl Default for BusinessContext {
    fn default() -> Self {
        Self {
            industry: Industry::default(),
            target_audience: Self::DEFAULT_AUDIENCE.to_string(),
            business_goal: BusinessGoal::default(),
            competitive_advantage: Vec::new(),
            tone: Tone::default(),
        }
    }
}
