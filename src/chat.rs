//! One-turn chat responder: solve, explain, recount history, or greet.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::config::{ChatConfig, Config, SolverConfig};
use crate::format::normalize_superscripts;
use crate::knowledge::entry_mentioned_in;
use crate::solve_with_config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
  Solution,
  Explanation,
  History,
  General,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
  pub kind: ReplyKind,
  pub content: String,
}

pub const WELCOME: &str = "আসসালামু আলাইকুম! আমি বীজগণিত জ্ঞানের সহায়ক। আমি আপনাকে বীজগণিত সমস্যা সমাধান, ইতিহাস এবং ব্যাখ্যায় সাহায্য করতে পারি। কীভাবে সাহায্য করতে পারি?";

const SOLVE_TRIGGERS: [&str; 3] = ["=", "সমাধান", "solve"];
const HISTORY_TRIGGERS: [&str; 3] = ["ইতিহাস", "history", "কে আবিষ্কার"];

const HISTORY_REPLY: &str = "🏛️ **বীজগণিতের ইতিহাস**\n\n\
• **আল-খোয়ারিজমি (৭৮০-৮৫০):** বীজগণিতের জনক\n\
• **ব্রহ্মগুপ্ত (৬২৮-৬৬৮):** শূন্যের ব্যবহার\n\
• **আর্যভট্ট (৪৭৬-৫৫০):** ভারতীয় গণিতবিদ\n\
• **আল-জাবর:** বীজগণিত শব্দের উৎস (আরবি)";

const DEFAULT_REPLIES: [&str; 4] = [
  "দুর্দান্ত প্রশ্ন! আমি আপনাকে বীজগণিত সমস্যা সমাধান, সূত্র এবং ব্যাখ্যায় সাহায্য করতে পারি। একটি সমীকরণ দিন বা কোন টপিক সম্পর্কে জানতে চান বলুন।",
  "আমি এখানে আছি সাহায্য করার জন্য! রৈখিক সমীকরণ, দ্বিঘাত সমীকরণ, গুণনীয়করণ - যেকোনো বিষয়ে প্রশ্ন করুন।",
  "বীজগণিত নিয়ে কোন সমস্যায় আছেন? আমি ধাপে ধাপে সমাধান ও ব্যাখ্যা দিতে পারি।",
  "কী জানতে চান? সমীকরণ সমাধান, সূত্র, নাকি বীজগণিতের ইতিহাস?",
];

/// Reply to `message`, picking a default greeting with the thread RNG.
pub fn respond(message: &str, config: &Config) -> ChatReply {
  respond_with_rng(message, config, &mut rand::thread_rng())
}

pub fn respond_with_rng<R: Rng + ?Sized>(
  message: &str,
  config: &Config,
  rng: &mut R,
) -> ChatReply {
  let lowered = message.to_lowercase();

  let wants_solution = SOLVE_TRIGGERS.iter().any(|t| lowered.contains(t))
    || config
      .chat
      .solve_keywords
      .iter()
      .any(|k| !k.is_empty() && lowered.contains(&k.to_lowercase()));
  if wants_solution {
    debug!("chat message routed to solver");
    return solution_reply(
      message,
      &problem_text(message, &config.chat),
      &config.solver,
    );
  }

  if let Some(entry) = entry_mentioned_in(&lowered) {
    debug!(topic = entry.topic, "chat message matched knowledge entry");
    return ChatReply {
      kind: ReplyKind::Explanation,
      content: format!(
        "📚 **{}**\n\n{}\n\n**উদাহরণসমূহ:**\n• {}\n\nআরো কিছু জানতে চান?",
        entry.topic,
        entry.content,
        entry.examples.join("\n• ")
      ),
    };
  }

  if HISTORY_TRIGGERS.iter().any(|t| lowered.contains(t)) {
    return ChatReply {
      kind: ReplyKind::History,
      content: HISTORY_REPLY.to_string(),
    };
  }

  let content = DEFAULT_REPLIES
    .choose(rng)
    .copied()
    .unwrap_or(DEFAULT_REPLIES[0]);
  ChatReply {
    kind: ReplyKind::General,
    content: content.to_string(),
  }
}

/// The problem inside a chat message: trigger words removed, and for
/// equations everything but the ASCII math text dropped.
fn problem_text(message: &str, config: &ChatConfig) -> String {
  let mut text = message.to_lowercase();
  for trigger in SOLVE_TRIGGERS[1..]
    .iter()
    .map(|t| t.to_string())
    .chain(config.solve_keywords.iter().map(|k| k.to_lowercase()))
  {
    if !trigger.is_empty() {
      text = text.replace(&trigger, " ");
    }
  }
  if text.contains('=') {
    text = normalize_superscripts(&text)
      .chars()
      .filter(char::is_ascii)
      .collect();
  }
  text.trim().to_string()
}

fn solution_reply(
  message: &str,
  problem: &str,
  config: &SolverConfig,
) -> ChatReply {
  match solve_with_config(problem, config) {
    Ok(solution) => ChatReply {
      kind: ReplyKind::Solution,
      content: format!(
        "🔍 **সমাধান:**\n\n**সমস্যা:** {}\n\n**ধাপসমূহ:**\n{}\n\n**উত্তর:** {}\n\n**ধরন:** {}",
        message.trim(),
        solution.steps.join("\n"),
        solution.solution,
        solution.problem_type.title()
      ),
    },
    Err(err) => ChatReply {
      kind: ReplyKind::General,
      content: format!(
        "দুঃখিত, এই সমস্যাটি সমাধান করা যায়নি। {err}\n{}",
        err.hint()
      ),
    },
  }
}
