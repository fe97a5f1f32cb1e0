//! Static profile content for the hero, about, and contact sections.

pub struct SkillGroup {
    pub area: &'static str,
    pub skills: &'static [&'static str],
}

pub struct ContactLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub bio: &'static [&'static str],
    pub skills: &'static [SkillGroup],
    pub email: &'static str,
    pub links: &'static [ContactLink],
}

pub const PROFILE: Profile = Profile {
    name: "Octo Cat",
    tagline: "Systems engineer who likes small, sharp tools.",
    bio: &[
        "I build network services, developer tooling, and the occasional \
         desktop app. Most of my work lives in public repositories, and \
         the gallery below is pulled straight from them.",
        "Away from the keyboard I grow chili plants and lose chess games.",
    ],
    skills: &[
        SkillGroup {
            area: "Languages",
            skills: &["Rust", "Go", "Python", "SQL"],
        },
        SkillGroup {
            area: "Infrastructure",
            skills: &["Linux", "PostgreSQL", "Docker", "Nix"],
        },
        SkillGroup {
            area: "Practices",
            skills: &["API design", "Profiling", "Code review"],
        },
    ],
    email: "octo@example.com",
    links: &[
        ContactLink {
            label: "GitHub",
            url: "https://github.com/octocat",
        },
        ContactLink {
            label: "Mastodon",
            url: "https://hachyderm.io/@octocat",
        },
    ],
};
