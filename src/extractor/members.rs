//! Member enumeration: the constructors and methods to analyze for a class.
//!
//! Constructors come first (implicit default constructors excluded), then
//! methods collected up the superclass chain, subclass first, so the most
//! derived declaration represents each overridden family.

use crate::error::{ExtractError, ExtractResult};
use crate::model::{ClassSymbol, MemberIdentity, MemberRef, SymbolTable};
use std::collections::HashSet;

pub fn enumerate<'a>(
    table: &'a SymbolTable,
    class: &'a ClassSymbol,
) -> ExtractResult<Vec<MemberRef<'a>>> {
    let mut members = constructors(class)?;
    members.extend(methods(table, class)?);
    Ok(members)
}

/// Declared constructors minus the implicit one.
///
/// The model reports a position even for the synthesized default
/// constructor; it is the class's own position, so compare against that.
fn constructors(class: &ClassSymbol) -> ExtractResult<Vec<MemberRef<'_>>> {
    let mut out = Vec::new();
    for ctor in &class.constructors {
        let member = MemberRef::constructor(class, ctor);
        let class_pos = class.position.as_ref().ok_or_else(|| ExtractError::MissingPosition {
            member: class.name.clone(),
        })?;
        let ctor_pos = ctor.position.as_ref().ok_or_else(|| ExtractError::MissingPosition {
            member: member.to_string(),
        })?;
        if ctor_pos == class_pos {
            log::debug!("skipping implicit constructor {}", member);
            continue;
        }
        out.push(member);
    }
    Ok(out)
}

/// Non-synthetic methods up the superclass chain, one per identity.
fn methods<'a>(
    table: &'a SymbolTable,
    class: &'a ClassSymbol,
) -> ExtractResult<Vec<MemberRef<'a>>> {
    let mut out = Vec::new();
    let mut seen: HashSet<MemberIdentity> = HashSet::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = class;

    loop {
        if !visited.insert(current.name.as_str()) {
            return Err(ExtractError::InheritanceCycle(current.name.clone()));
        }

        for method in &current.methods {
            // Recorded even when skipped below, so a synthetic override
            // still hides the ancestor's method.
            if !seen.insert(method.identity()) {
                log::debug!("{}.{} already represented", current.name, method.identity());
                continue;
            }
            if method.synthetic {
                log::debug!("skipping synthetic {}.{}", current.name, method.identity());
                continue;
            }
            out.push(MemberRef::method(current, method));
        }

        match current.superclass.as_deref() {
            None => break,
            Some(name) if name == table.root_class() => break,
            Some(name) => match table.class(name) {
                Some(parent) => current = parent,
                None => {
                    log::debug!("superclass {} of {} is not in the model", name, current.name);
                    break;
                }
            },
        }
    }

    Ok(out)
}
