//! Static Bengali knowledge base for the chat responder and `search`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
  Basic,
  Intermediate,
  Advanced,
  History,
  Formula,
  Definition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeEntry {
  pub topic: &'static str,
  pub content: &'static str,
  pub examples: &'static [&'static str],
  pub keywords: &'static [&'static str],
  pub category: Category,
  /// 1 (easiest) to 5.
  pub difficulty: u8,
}

pub static KNOWLEDGE_BASE: &[KnowledgeEntry] = &[
  KnowledgeEntry {
    topic: "চল বা অজানা রাশি",
    content: "চল হল এমন একটি প্রতীক (সাধারণত x, y, z) যার মান অজানা এবং আমাদের খুঁজে বের করতে হয়। এটি গণিতের মূল ভিত্তি।",
    examples: &["x = 5", "y + 3 = 10", "2a - 7 = 1"],
    keywords: &["চল", "variable", "অজানা", "unknown", "প্রতীক"],
    category: Category::Basic,
    difficulty: 1,
  },
  KnowledgeEntry {
    topic: "রৈখিক সমীকরণ",
    content: "রৈখিক সমীকরণ হল এমন সমীকরণ যেখানে চলরাশির সর্বোচ্চ ঘাত ১। এর গ্রাফ একটি সরল রেখা হয়। সাধারণ রূপ: ax + b = 0",
    examples: &["2x + 5 = 11", "3x - 7 = 8", "x/2 + 3 = 7", "4x = 20"],
    keywords: &["রৈখিক", "linear", "সমীকরণ", "equation", "ঘাত", "degree", "সরল রেখা"],
    category: Category::Basic,
    difficulty: 2,
  },
  KnowledgeEntry {
    topic: "দ্বিঘাত সমীকরণ",
    content: "দ্বিঘাত সমীকরণ হল এমন সমীকরণ যেখানে চলরাশির সর্বোচ্চ ঘাত ২। সাধারণ রূপ: ax² + bx + c = 0। এর সমাধান শ্রীধর আচার্যের সূত্র দিয়ে করা যায়।",
    examples: &["x² + 5x + 6 = 0", "2x² - 7x + 3 = 0", "x² - 4 = 0", "3x² + 2x - 1 = 0"],
    keywords: &["দ্বিঘাত", "quadratic", "শ্রীধর", "discriminant", "প্যারাবোলা"],
    category: Category::Intermediate,
    difficulty: 3,
  },
  KnowledgeEntry {
    topic: "গুণনীয়করণ",
    content: "গুণনীয়করণ হল একটি বহুপদকে দুই বা ততোধিক সরল গুণনীয়কের গুণফল হিসেবে প্রকাশ করা। এটি সমীকরণ সমাধানের জন্য অত্যন্ত গুরুত্বপূর্ণ।",
    examples: &["x² - 4 = (x+2)(x-2)", "x² + 5x + 6 = (x+2)(x+3)", "a² - b² = (a+b)(a-b)", "x² - 9 = (x+3)(x-3)"],
    keywords: &["গুণনীয়করণ", "factorization", "গুণনীয়ক", "factor", "বহুপদ", "polynomial"],
    category: Category::Intermediate,
    difficulty: 3,
  },
  KnowledgeEntry {
    topic: "অনুপাত ও সমানুপাত",
    content: "অনুপাত হল দুইটি রাশির তুলনা। a:b = c:d হলে এটি সমানুপাত, যেখানে a×d = b×c। এটি বাস্তব জীবনে ব্যাপকভাবে ব্যবহৃত হয়।",
    examples: &["3:4 = 6:8", "x:5 = 4:10", "2:3 = 8:12", "1:2 = 5:10"],
    keywords: &["অনুপাত", "ratio", "সমানুপাত", "proportion", "তুলনা", "comparison"],
    category: Category::Basic,
    difficulty: 2,
  },
  KnowledgeEntry {
    topic: "বীজগণিতীয় সূত্র",
    content: "প্রয়োজনীয় সূত্রসমূহ যা বীজগণিতে ব্যাপকভাবে ব্যবহৃত হয়। এগুলো মুখস্থ রাখা অত্যন্ত গুরুত্বপূর্ণ।",
    examples: &[
      "(a+b)² = a² + 2ab + b²",
      "(a-b)² = a² - 2ab + b²",
      "a² - b² = (a+b)(a-b)",
      "(a+b)³ = a³ + 3a²b + 3ab² + b³",
    ],
    keywords: &["সূত্র", "formula", "বর্গ", "square", "ঘন", "cube", "বিস্তৃতি", "expansion"],
    category: Category::Formula,
    difficulty: 2,
  },
  KnowledgeEntry {
    topic: "সমীকরণ পদ্ধতি",
    content: "দুই বা ততোধিক সমীকরণের সমন্বয়ে গঠিত পদ্ধতি। বিলোপন পদ্ধতি, প্রতিস্থাপন পদ্ধতি দিয়ে সমাধান করা যায়।",
    examples: &["x + y = 5, x - y = 1", "2x + 3y = 7, x - y = 1", "3x + 2y = 12, x + y = 5"],
    keywords: &["সমীকরণ পদ্ধতি", "system", "বিলোপন", "elimination", "প্রতিস্থাপন", "substitution"],
    category: Category::Intermediate,
    difficulty: 3,
  },
  KnowledgeEntry {
    topic: "অসমতা",
    content: "অসমতা হল এমন গাণিতিক বিবৃতি যেখানে দুটি রাশি সমান নয়। >, <, ≥, ≤ চিহ্ন ব্যবহার করা হয়।",
    examples: &["x > 5", "2x + 3 < 10", "x² ≥ 4", "-1 ≤ x ≤ 5"],
    keywords: &["অসমতা", "inequality", "greater", "less"],
    category: Category::Intermediate,
    difficulty: 3,
  },
  KnowledgeEntry {
    topic: "ঘাত ও মূল",
    content: "ঘাত হল সংখ্যাকে কতবার নিজের সাথে গুণ করতে হবে। মূল হল ঘাতের বিপরীত প্রক্রিয়া। √a = b মানে b² = a",
    examples: &["2³ = 8", "√16 = 4", "x^(1/2) = √x", "5² = 25"],
    keywords: &["exponent", "power", "মূল", "root", "বর্গমূল", "square root"],
    category: Category::Intermediate,
    difficulty: 3,
  },
  KnowledgeEntry {
    topic: "ফাংশন",
    content: "ফাংশন হল এমন একটি নিয়ম যা প্রতিটি ইনপুটের জন্য একটি নির্দিষ্ট আউটপুট দেয়। f(x) = 2x + 1 একটি ফাংশনের উদাহরণ।",
    examples: &["f(x) = x + 1", "g(x) = x²", "h(x) = 2x - 3", "f(x) = √x"],
    keywords: &["ফাংশন", "function", "ইনপুট", "input", "আউটপুট", "output", "ডোমেইন", "রেঞ্জ"],
    category: Category::Advanced,
    difficulty: 4,
  },
  KnowledgeEntry {
    topic: "বীজগণিতের ইতিহাস",
    content: "বীজগণিত শব্দটি এসেছে আরবি 'আল-জাবর' থেকে। আল-খোয়ারিজমি (৭৮০-৮৫০ খ্রি.) কে বীজগণিতের জনক বলা হয়।",
    examples: &["আল-খোয়ারিজমির অবদান", "ব্রহ্মগুপ্তের কাজ", "আর্যভট্টের গণনা"],
    keywords: &["আল-খোয়ারিজমি", "al-khwarizmi", "আরবি", "arabic", "আল-জাবর"],
    category: Category::History,
    difficulty: 1,
  },
];

/// Entries whose keywords, topic, or content contain `query`
/// (case-insensitive). An empty query matches nothing.
pub fn search_knowledge_base(query: &str) -> Vec<&'static KnowledgeEntry> {
  let needle = query.trim().to_lowercase();
  if needle.is_empty() {
    return Vec::new();
  }
  KNOWLEDGE_BASE
    .iter()
    .filter(|entry| {
      entry.keywords.iter().any(|k| k.to_lowercase().contains(&needle))
        || entry.topic.to_lowercase().contains(&needle)
        || entry.content.to_lowercase().contains(&needle)
    })
    .collect()
}

pub fn entries_by_category(category: Category) -> Vec<&'static KnowledgeEntry> {
  KNOWLEDGE_BASE
    .iter()
    .filter(|entry| entry.category == category)
    .collect()
}

pub fn entries_by_difficulty(difficulty: u8) -> Vec<&'static KnowledgeEntry> {
  KNOWLEDGE_BASE
    .iter()
    .filter(|entry| entry.difficulty == difficulty)
    .collect()
}

/// First entry with a keyword occurring in `message`.
pub fn entry_mentioned_in(message: &str) -> Option<&'static KnowledgeEntry> {
  let message = message.to_lowercase();
  KNOWLEDGE_BASE.iter().find(|entry| {
    entry
      .keywords
      .iter()
      .any(|k| message.contains(&k.to_lowercase()))
  })
}
