use gistmarks::{
    count_tags, extract_tags, load_gists_from_str, Category, Gist, GistFilter, Owner, TagCounts,
};
use serde_json::json;

const GISTS: &str = r##"[
    {
        "id": "1",
        "owner": { "id": 583231, "login": "octocat" },
        "description": "Bash prompt #shell #dotfiles",
        "created_at": "2015-05-01T10:00:00Z",
        "updated_at": "2015-05-02T10:00:00Z",
        "files": { "prompt.sh": { "size": 120 } },
        "public": true,
        "html_url": "https://gist.github.com/1"
    },
    {
        "id": "2",
        "owner": { "id": 1, "login": "someone" },
        "description": "Vim config #dotfiles",
        "created_at": "2015-06-01T10:00:00Z",
        "updated_at": "2015-06-01T10:00:00Z",
        "public": false,
        "starred": true
    },
    {
        "id": "3",
        "owner": { "id": 583231, "login": "octocat" },
        "description": null,
        "created_at": "2015-07-01T10:00:00Z",
        "updated_at": "2015-07-01T10:00:00Z",
        "public": false
    }
]"##;

#[test]
fn extraction_examples() {
    let sample = extract_tags("Sample #todo #urgent text");
    assert_eq!(sample.tags, ["#todo", "#urgent"]);
    assert_eq!(
        sample.description.split_whitespace().collect::<Vec<_>>(),
        ["Sample", "text"]
    );

    let plain = extract_tags("no tags here");
    assert_eq!(plain.description, "no tags here");
    assert!(plain.tags.is_empty());
}

#[test]
fn two_gist_example() {
    let mut a = Gist::new("A");
    a.set_owner(Owner::new("U1"));
    a.set_description_and_tags("#a");
    a.set_is_public(true);

    let mut b = Gist::new("B");
    b.set_owner(Owner::new("U2"));
    b.set_description_and_tags("");
    b.set_is_starred(true);

    assert_eq!(
        serde_json::to_value(count_tags(&[a, b], "U1")).unwrap(),
        json!({
            "public": 1, "private": 1, "noTag": 1, "all": 2,
            "myGists": 1, "starred": 1, "#a": 1
        })
    );
}

#[test]
fn duplicate_tag_through_extraction() {
    let mut gist = Gist::new("x");
    gist.set_description_and_tags("#x #x");

    assert_eq!(count_tags(&[gist], "anyone").tag_count("#x"), Some(2));
}

#[test]
fn sidebar_from_api_records() {
    let gists = load_gists_from_str(GISTS).unwrap();
    let counts = TagCounts::from_gists(&gists, "583231");

    assert_eq!(
        serde_json::to_string(&counts).unwrap(),
        r##"{"public":1,"private":2,"noTag":1,"all":3,"myGists":2,"starred":1,"#shell":1,"#dotfiles":2}"##
    );

    for (key, count) in counts.iter() {
        let filter: GistFilter = key.parse().unwrap();
        let selected = filter.apply(&gists, "583231");
        assert_eq!(selected.len(), count, "{key}");
    }

    let mine: Vec<&str> = GistFilter::Category(Category::MyGists)
        .apply(&gists, "583231")
        .into_iter()
        .map(Gist::id)
        .collect();
    assert_eq!(mine, ["1", "3"]);
}

#[test]
fn counting_does_not_touch_gists() {
    let gists = load_gists_from_str(GISTS).unwrap();
    let before = gists.clone();

    let _ = count_tags(&gists, "583231");

    assert_eq!(gists, before);
    assert_eq!(gists[0].description(), "Bash prompt");
    assert_eq!(gists[0].created_at(), "2015-05-01 10:00:00");
}
