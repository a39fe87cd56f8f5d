// Dweve HCF - Header Config Format
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Line normalization applied before any classification.

/// Comment introducer. Everything from its first occurrence is dropped.
pub const COMMENT_MARKER: &str = "//";

/// Normalize one raw line.
///
/// Steps, in order:
/// - trim leading and trailing whitespace
/// - collapse every run of spaces into a single space (tabs are kept)
/// - truncate at the first `//`
/// - trim whatever trailing whitespace the truncation exposed
///
/// Comment stripping happens before header detection, so `"foo // bar:"`
/// becomes `"foo"` and is no longer a header.
pub fn normalize_line(raw: &str) -> String {
    let trimmed = raw.trim();

    let mut line = String::with_capacity(trimmed.len());
    let mut prev_space = false;
    for c in trimmed.chars() {
        if c == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        line.push(c);
    }

    if let Some(pos) = line.find(COMMENT_MARKER) {
        line.truncate(pos);
        let end = line.trim_end().len();
        line.truncate(end);
    }

    line
}
