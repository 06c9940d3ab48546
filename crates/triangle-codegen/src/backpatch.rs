//! The backpatcher (C6, part one): resolves every symbolic label into the
//! instruction index it ends up at, in two passes over the generator's
//! output.
//!
//! Pass one walks the item stream once, dropping `Item::Label` markers
//! while recording, for each label, `offset = i - k` where `i` is the
//! marker's position in the stream and `k` is how many labels have been
//! dropped so far — exactly the final instruction index the label names.
//! Pass two rewrites every `Operand::Label` into `Operand::Known` using
//! that table, discarding the labels for good.

use std::collections::HashMap;

use crate::instr::{Item, LabelId, Operand, PseudoInstr, Register, TamInstr};

pub fn resolve(items: Vec<Item>) -> Vec<TamInstr> {
    let mut offsets: HashMap<LabelId, i32> = HashMap::new();
    let mut dropped = 0i32;
    for (i, item) in items.iter().enumerate() {
        if let Item::Label(id) = item {
            offsets.insert(*id, i as i32 - dropped);
            dropped += 1;
        }
    }

    let instructions: Vec<PseudoInstr> = items
        .into_iter()
        .filter_map(|item| match item {
            Item::Instr(instr) => Some(instr),
            Item::Label(_) => None,
        })
        .collect();

    log::debug!(
        "backpatcher resolved {} labels over {} instructions",
        offsets.len(),
        instructions.len()
    );

    instructions
        .into_iter()
        .map(|instr| resolve_instr(instr, &offsets))
        .collect()
}

fn resolve_instr(instr: PseudoInstr, offsets: &HashMap<LabelId, i32>) -> TamInstr {
    let d = match instr.d {
        Operand::Known(value) => value,
        Operand::Label(id) => *offsets
            .get(&id)
            .unwrap_or_else(|| panic!("label {id:?} referenced but never placed")),
    };
    TamInstr {
        op: instr.op.code(),
        r: register_code(instr.r),
        n: instr.n,
        d,
    }
}

fn register_code(register: Register) -> i32 {
    register.code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instr::Op;

    #[test]
    fn labels_resolve_to_their_post_label_instruction_index() {
        let target = LabelId(0);
        let items = vec![
            Item::Instr(PseudoInstr {
                op: Op::Jump,
                r: Register::Cb,
                n: 0,
                d: Operand::Label(target),
            }),
            Item::Instr(PseudoInstr {
                op: Op::Halt,
                r: Register::Cb,
                n: 0,
                d: Operand::Known(0),
            }),
            Item::Label(target),
            Item::Instr(PseudoInstr {
                op: Op::Halt,
                r: Register::Cb,
                n: 0,
                d: Operand::Known(0),
            }),
        ];
        let resolved = resolve(items);
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0].d, 2);
    }

    #[test]
    fn dropping_labels_shifts_later_targets_down() {
        let a = LabelId(0);
        let b = LabelId(1);
        let items = vec![
            Item::Label(a),
            Item::Instr(PseudoInstr {
                op: Op::Halt,
                r: Register::Cb,
                n: 0,
                d: Operand::Known(0),
            }),
            Item::Label(b),
            Item::Instr(PseudoInstr {
                op: Op::Jump,
                r: Register::Cb,
                n: 0,
                d: Operand::Label(a),
            }),
        ];
        let resolved = resolve(items);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[1].d, 0);
    }
}
