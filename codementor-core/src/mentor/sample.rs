//! Built-in inputs for trying the pipeline without preparing any files.

use super::model::{HistoryEntry, SkillMap};

/// A hash-map two-sum solution in Python.
pub const SAMPLE_CODE: &str = r#"def twoSum(nums, target):
    """
    Find two numbers in array that add up to target
    """
    hash_map = {}
    for i, num in enumerate(nums):
        complement = target - num
        if complement in hash_map:
            return [hash_map[complement], i]
        hash_map[num] = i
    return []

# Test the function
nums = [2, 7, 11, 15]
target = 9
result = twoSum(nums, target)
print(f"Indices: {result}")"#;

pub const SAMPLE_PROBLEM: &str = "Given an array of integers nums and an integer target, \
return indices of the two numbers such that they add up to target.";

/// Recent activity of a demo learner.
pub fn demo_history() -> Vec<HistoryEntry> {
    vec![
        HistoryEntry::new("Two Sum", "Easy", "completed"),
        HistoryEntry::new("Longest Substring", "Medium", "attempted"),
        HistoryEntry::new("Merge Intervals", "Medium", "completed"),
        HistoryEntry::new("Binary Tree Inorder", "Medium", "completed"),
    ]
}

/// Skill breakdown of the same demo learner.
pub fn demo_skills() -> SkillMap {
    [
        ("Arrays", 85),
        ("Strings", 78),
        ("Trees", 65),
        ("Graphs", 45),
        ("DP", 30),
    ]
    .into_iter()
    .map(|(name, level)| (name.to_string(), level))
    .collect()
}
