//! Class index and the hierarchy queries the extractor relies on.
//!
//! Several model documents are merged into one table. A class defined in more
//! than one document keeps its last definition but its first position in the
//! class order.
//!
//! Every superclass walk ends below the root class; the root and anything
//! above it never take part in a query.

use super::{ClassSymbol, MemberRef, ModelDocument};
use crate::config::DEFAULT_ROOT_CLASS;
use std::collections::{HashMap, HashSet};

#[derive(Debug)]
pub struct SymbolTable {
    classes: Vec<ClassSymbol>,
    by_name: HashMap<String, usize>,
    root_class: String,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self {
            classes: Vec::new(),
            by_name: HashMap::new(),
            root_class: DEFAULT_ROOT_CLASS.to_string(),
        }
    }
}

impl SymbolTable {
    /// Merge documents in order; later definitions replace earlier ones.
    pub fn from_documents(docs: Vec<(String, ModelDocument)>) -> Self {
        let mut table = SymbolTable::default();
        for (source, doc) in docs {
            for class in doc.classes {
                if let Some(&slot) = table.by_name.get(&class.name) {
                    log::warn!("{}: redefines {}, keeping the later definition", source, class.name);
                    table.classes[slot] = class;
                } else {
                    table.by_name.insert(class.name.clone(), table.classes.len());
                    table.classes.push(class);
                }
            }
        }
        table
    }

    /// End superclass walks at `name` instead of `java.lang.Object`.
    pub fn with_root_class(mut self, name: impl Into<String>) -> Self {
        self.root_class = name.into();
        self
    }

    pub fn root_class(&self) -> &str {
        &self.root_class
    }

    pub fn class(&self, name: &str) -> Option<&ClassSymbol> {
        self.by_name.get(name).map(|&i| &self.classes[i])
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassSymbol> {
        self.classes.iter()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Superclass of `class`, when the model knows it and it is not the root.
    pub fn superclass(&self, class: &ClassSymbol) -> Option<&ClassSymbol> {
        class
            .superclass
            .as_deref()
            .filter(|&name| name != self.root_class)
            .and_then(|name| self.class(name))
    }

    /// Proper ancestors of `class` below the root, nearest first. Stops
    /// quietly on a cycle.
    pub fn ancestors<'a>(&'a self, class: &'a ClassSymbol) -> Ancestors<'a> {
        let mut seen = HashSet::new();
        seen.insert(class.name.as_str());
        Ancestors {
            table: self,
            current: class,
            seen,
        }
    }

    /// Methods overridden by `member`, nearest first.
    pub fn override_chain<'a>(
        &'a self,
        member: MemberRef<'a>,
    ) -> impl Iterator<Item = MemberRef<'a>> + 'a {
        let identity = member.identity();
        let enabled = member.is_method();
        self.ancestors(member.class)
            .filter(move |_| enabled)
            .filter_map(move |class| {
                class
                    .methods
                    .iter()
                    .find(|m| m.identity() == identity)
                    .map(|m| MemberRef::method(class, m))
            })
    }

    /// Member whose documentation stands in for `member`.
    ///
    /// Constructors and documented methods hold their own documentation. An
    /// undocumented method defers to the first documented method it
    /// overrides; when none is documented, to the farthest one.
    pub fn documentation_holder<'a>(&'a self, member: MemberRef<'a>) -> MemberRef<'a> {
        if !member.is_method() || member.member.has_description() {
            return member;
        }
        let mut holder = member;
        for overridden in self.override_chain(member) {
            if overridden.member.has_description() {
                return overridden;
            }
            holder = overridden;
        }
        holder
    }

    /// Every interface of `class`, transitively, each once.
    ///
    /// Order: each direct interface followed depth-first by what it extends,
    /// then the same for the superclass chain.
    pub fn all_interfaces<'a>(&'a self, class: &'a ClassSymbol) -> Vec<&'a ClassSymbol> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for c in std::iter::once(class).chain(self.ancestors(class)) {
            for name in &c.interfaces {
                self.collect_interface(name, &mut seen, &mut out);
            }
        }
        out
    }

    fn collect_interface<'a>(
        &'a self,
        name: &'a str,
        seen: &mut HashSet<&'a str>,
        out: &mut Vec<&'a ClassSymbol>,
    ) {
        if !seen.insert(name) {
            return;
        }
        let Some(iface) = self.class(name) else {
            log::debug!("interface {} is not in the model", name);
            return;
        };
        out.push(iface);
        for parent in &iface.interfaces {
            self.collect_interface(parent, seen, out);
        }
    }

    /// Whether `sub` extends `sup`, directly or through other interfaces.
    pub fn is_subinterface(&self, sub: &ClassSymbol, sup: &ClassSymbol) -> bool {
        if sub.name == sup.name {
            return false;
        }
        let mut seen = HashSet::new();
        let mut stack: Vec<&str> = sub.interfaces.iter().map(String::as_str).collect();
        while let Some(name) = stack.pop() {
            if name == sup.name {
                return true;
            }
            if !seen.insert(name) {
                continue;
            }
            if let Some(iface) = self.class(name) {
                stack.extend(iface.interfaces.iter().map(String::as_str));
            }
        }
        false
    }

    /// Interface methods that `member` implements, most specific only.
    pub fn implemented_methods<'a>(&'a self, member: MemberRef<'a>) -> Vec<MemberRef<'a>> {
        if !member.is_method() {
            return Vec::new();
        }
        let identity = member.identity();
        let mut found: Vec<MemberRef<'a>> = Vec::new();
        for iface in self.all_interfaces(member.class) {
            let Some(method) = iface.methods.iter().find(|m| m.identity() == identity) else {
                continue;
            };
            if found.iter().any(|f| self.is_subinterface(f.class, iface)) {
                continue;
            }
            found.retain(|f| !self.is_subinterface(iface, f.class));
            found.push(MemberRef::method(iface, method));
        }
        found
    }
}

pub struct Ancestors<'a> {
    table: &'a SymbolTable,
    current: &'a ClassSymbol,
    seen: HashSet<&'a str>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a ClassSymbol;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.table.superclass(self.current)?;
        if !self.seen.insert(next.name.as_str()) {
            return None;
        }
        self.current = next;
        Some(next)
    }
}
