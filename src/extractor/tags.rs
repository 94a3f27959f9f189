//! Exception tag resolution for one member.
//!
//! Tags come from three places, concatenated in this order and never
//! de-duplicated here:
//! 1. the member's own `@throws`/`@exception` tags
//! 2. its documentation holder's tags, when the member inherits documentation
//! 3. the interface methods it implements, when the holder is a method

use crate::error::{ExtractError, ExtractResult};
use crate::model::tag::exceptional_tags;
use crate::model::{ExceptionalTag, MemberRef, SymbolTable, ThrowsTag};

pub fn resolve<'a>(table: &'a SymbolTable, member: MemberRef<'a>) -> ExtractResult<Vec<ThrowsTag<'a>>> {
    let mut tags: Vec<ExceptionalTag<'a>> = exceptional_tags(member).collect();

    let holder = table.documentation_holder(member);
    if !holder.same_as(&member) {
        log::debug!("{} inherits documentation from {}", member, holder);
        tags.extend(exceptional_tags(holder));
    }

    if holder.is_method() {
        for implemented in table.implemented_methods(member) {
            tags.extend(exceptional_tags(implemented));
        }
    }

    tags.into_iter().map(|tag| expect_throws(member, tag)).collect()
}

fn expect_throws<'a>(member: MemberRef<'a>, tag: ExceptionalTag<'a>) -> ExtractResult<ThrowsTag<'a>> {
    match tag {
        ExceptionalTag::Throws(tag) => Ok(tag),
        ExceptionalTag::Invalid { owner, kind } => Err(ExtractError::MalformedTag {
            member: if owner.same_as(&member) {
                member.to_string()
            } else {
                format!("{} (inherited from {})", member, owner)
            },
            kind: kind.to_string(),
        }),
    }
}
