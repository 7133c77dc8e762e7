//! Sequence assembly: grouping file names into collections.
//!
//! Each digit run in a file name is a frame-number candidate. Candidates
//! group by identical head and tail text plus compatible padding, and a
//! group becomes a [`Collection`] once it carries enough distinct indexes.
//! Collections are emitted in detection order: the input position of each
//! collection's earliest member, which callers rely on when more than one
//! sequence coexists in a single file list.

use crate::config::AnalyzerConfig;
use crate::lexer;
use crate::model::{Collection, FileNameSet};
use std::collections::{BTreeSet, HashMap};
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GroupKey {
    head: String,
    tail: String,
    padding: usize,
}

#[derive(Debug)]
struct Member {
    name_pos: usize,
    value: u32,
    width: usize,
}

#[derive(Debug)]
struct Group {
    key: GroupKey,
    // First-seen casing, kept for display when grouping is case-folded.
    head: String,
    tail: String,
    first_pos: usize,
    members: Vec<Member>,
}

/// Group file names into collections plus a remainder.
///
/// The remainder holds every input name that joined no emitted collection:
/// names without a digit run, names excluded by the extension hint, and
/// names whose candidates never met `minimum_items`.
pub(crate) fn assemble_with_config(
    files: &FileNameSet<'_>,
    config: &AnalyzerConfig,
) -> (Vec<Collection>, Vec<String>) {
    let names: Vec<&str> = files.iter().collect();

    let mut groups: Vec<Group> = Vec::new();
    let mut key_index: HashMap<GroupKey, usize> = HashMap::new();

    for (pos, name) in names.iter().enumerate() {
        if let Some(hint) = &config.extension_hint {
            if !matches_extension(name, hint) {
                continue;
            }
        }
        for run in lexer::number_runs(name) {
            // Runs too long for u32 are not plausible frame numbers.
            let Some(value) = run.value() else { continue };
            let head = &name[..run.span.start];
            let tail = &name[run.span.end..];
            let key = GroupKey {
                head: fold(head, config.case_sensitive),
                tail: fold(tail, config.case_sensitive),
                padding: run.padding(),
            };
            let group_pos = *key_index.entry(key.clone()).or_insert_with(|| {
                groups.push(Group {
                    key,
                    head: head.to_owned(),
                    tail: tail.to_owned(),
                    first_pos: pos,
                    members: Vec::new(),
                });
                groups.len() - 1
            });
            groups[group_pos].members.push(Member {
                name_pos: pos,
                value,
                width: run.width(),
            });
        }
    }

    merge_padding_boundaries(&mut groups, &key_index);

    let mut in_collection = vec![false; names.len()];
    let mut emitted: Vec<(usize, Collection)> = Vec::new();
    for group in &groups {
        if group.members.is_empty() {
            continue;
        }
        let indexes: BTreeSet<u32> = group.members.iter().map(|m| m.value).collect();
        if indexes.len() < config.minimum_items {
            continue;
        }
        for member in &group.members {
            in_collection[member.name_pos] = true;
        }
        emitted.push((
            group.first_pos,
            Collection::new(
                group.head.clone(),
                group.tail.clone(),
                group.key.padding,
                indexes,
            ),
        ));
    }
    // Stable sort keeps left-to-right run order for ties within one name.
    emitted.sort_by_key(|(first_pos, _)| *first_pos);

    let collections: Vec<Collection> = emitted.into_iter().map(|(_, c)| c).collect();
    let remainder: Vec<String> = names
        .iter()
        .zip(&in_collection)
        .filter(|(_, joined)| !**joined)
        .map(|(name, _)| (*name).to_owned())
        .collect();

    trace!(
        collections = collections.len(),
        remainder = remainder.len(),
        "assembled {} file name(s)",
        names.len()
    );
    (collections, remainder)
}

/// Fold unpadded groups across padding boundaries.
///
/// An unpadded run whose digit width equals a padded group's width belongs
/// to that group: `0998, 0999, 1000` is one sequence even though `1000`
/// carries no leading zero.
fn merge_padding_boundaries(groups: &mut [Group], key_index: &HashMap<GroupKey, usize>) {
    for pos in 0..groups.len() {
        if groups[pos].key.padding != 0 || groups[pos].members.is_empty() {
            continue;
        }
        let Some(width) = uniform_width(&groups[pos].members) else {
            continue;
        };
        let target = GroupKey {
            head: groups[pos].key.head.clone(),
            tail: groups[pos].key.tail.clone(),
            padding: width,
        };
        // Padded keys always have padding >= 2, so target != pos.
        if let Some(&target_pos) = key_index.get(&target) {
            let moved = std::mem::take(&mut groups[pos].members);
            let moved_first = groups[pos].first_pos;
            let target_group = &mut groups[target_pos];
            target_group.members.extend(moved);
            target_group.first_pos = target_group.first_pos.min(moved_first);
        }
    }
}

fn uniform_width(members: &[Member]) -> Option<usize> {
    let width = members.first()?.width;
    members.iter().all(|m| m.width == width).then_some(width)
}

fn fold(text: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        text.to_owned()
    } else {
        text.to_lowercase()
    }
}

fn matches_extension(name: &str, hint: &str) -> bool {
    let hint = hint.trim_start_matches('.');
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.eq_ignore_ascii_case(hint),
        None => false,
    }
}
