// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use roster_model::Member;

/// Demo members shown when the directory cannot be reached.
pub fn fallback_members() -> Vec<Member> {
    vec![
        Member {
            id: 1,
            name: "Priya Sharma".into(),
            role: "Full Stack Developer".into(),
            photo: "https://i.pravatar.cc/300?img=5".into(),
            skills: vec![
                "React".into(),
                "Node.js".into(),
                "MongoDB".into(),
                "TypeScript".into(),
            ],
            bio: "Passionate about building scalable web applications and mentoring junior developers."
                .into(),
            location: "Mumbai".into(),
            email: "priya.sharma@gdgc.dev".into(),
            github: "priyasharma".into(),
            joined_date: "2023-01-15".into(),
        },
        Member {
            id: 2,
            name: "Rahul Verma".into(),
            role: "UI/UX Designer".into(),
            photo: "https://i.pravatar.cc/300?img=12".into(),
            skills: vec![
                "Figma".into(),
                "Adobe XD".into(),
                "User Research".into(),
                "Prototyping".into(),
            ],
            bio: "Creating delightful user experiences through thoughtful design and research.".into(),
            location: "Delhi".into(),
            email: "rahul.verma@gdgc.dev".into(),
            github: "rahulverma".into(),
            joined_date: "2023-02-20".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::Roster;

    #[test]
    fn test_fallback_is_a_valid_roster() {
        let roster = Roster::new(fallback_members()).unwrap();
        assert_eq!(roster.len(), 2);
    }
}
