//! Built-in sample content.
//!
//! Mirrors a small slice of a real board-exam curriculum: two specialties, the
//! infectious-diseases board track with its courses, and the fungal-infection chapter
//! with a quiz on candidiasis.

use prep_core::model::{
    Catalog, Chapter, ChapterId, Course, CourseId, Exam, ExamId, ExamKind, ExamLevel, ExamLevelId,
    Question, QuestionId, QuestionOwner, QuestionSet, Slug, Specialty, SpecialtyId, Subspecialty,
    SubspecialtyId, Topic, TopicId,
};

use crate::repository::StorageError;

type Seeded<T> = Result<T, StorageError>;

const CANDIDIASIS_CONTENT: &str = "\
## کاندیدیازیس (Candidiasis)

عفونت قارچی ناشی از گونه‌های کاندیدا، شایع‌ترین آنها Candida albicans است.

### اپیدمیولوژی
- شایع‌ترین عفونت قارچی در انسان
- عامل مهم عفونت در بیماران immunocompromised

### تظاهرات بالینی
1. کاندیدیازیس مخاطی (دهان، مری، واژن)
2. کاندیدمی و عفونت سیستمیک

### تشخیص
- کشت خون
- تست (1,3)-β-D-glucan

### درمان
- Fluconazole (اولین خط)
- Echinocandins (موارد شدید)
";

fn slug(value: &str) -> Seeded<Slug> {
    Slug::parse(value)
        .map_err(|err| StorageError::Serialization(format!("seed slug {value:?}: {err}")))
}

fn question(
    id: u64,
    text: &str,
    options: [&str; 4],
    correct_index: usize,
    explanation: &str,
    source: &str,
) -> Seeded<Question> {
    Question::new(
        QuestionId::new(id),
        text,
        options.iter().map(ToString::to_string).collect(),
        correct_index,
        explanation,
        source,
    )
    .map_err(|err| StorageError::Serialization(format!("seed question {id}: {err}")))
}

fn specialties() -> Seeded<Vec<Specialty>> {
    Ok(vec![
        Specialty {
            id: SpecialtyId::new(1),
            slug: slug("medicine")?,
            name_fa: "پزشکی".into(),
            name_en: "Medicine".into(),
            icon: "🩺".into(),
        },
        Specialty {
            id: SpecialtyId::new(2),
            slug: slug("dentistry")?,
            name_fa: "دندانپزشکی".into(),
            name_en: "Dentistry".into(),
            icon: "🦷".into(),
        },
    ])
}

fn exam_levels() -> Seeded<Vec<ExamLevel>> {
    let level =
        |id, specialty, key: &str, fa: &str, en: &str, icon: &str, requires| -> Seeded<ExamLevel> {
            Ok(ExamLevel {
                id: ExamLevelId::new(id),
                specialty_id: SpecialtyId::new(specialty),
                slug: slug(key)?,
                name_fa: fa.into(),
                name_en: en.into(),
                icon: icon.into(),
                requires_subspecialty: requires,
            })
        };
    [
        level(1, 1, "pre_residency", "آزمون پره", "Pre-Residency", "📚", false),
        level(2, 1, "residency", "آزمون دستیاری", "Residency", "🎓", false),
        level(3, 1, "board_promotion", "بورد / ارتقا", "Board/Promotion", "📊", true),
        level(4, 2, "dental_residency", "دستیاری دندانپزشکی", "Dental Residency", "🎓", false),
    ]
    .into_iter()
    .collect()
}

fn subspecialties() -> Seeded<Vec<Subspecialty>> {
    let sub = |id, key: &str, fa: &str, en: &str| -> Seeded<Subspecialty> {
        Ok(Subspecialty {
            id: SubspecialtyId::new(id),
            specialty_id: SpecialtyId::new(1),
            exam_level_id: ExamLevelId::new(3),
            slug: slug(key)?,
            name_fa: fa.into(),
            name_en: en.into(),
        })
    };
    [
        sub(1, "infectious", "عفونی", "Infectious Diseases"),
        sub(2, "cardiology", "قلب و عروق", "Cardiology"),
        sub(3, "gastroenterology", "گوارش", "Gastroenterology"),
    ]
    .into_iter()
    .collect()
}

fn exams() -> Seeded<Vec<Exam>> {
    Ok(vec![
        Exam {
            id: ExamId::new(1),
            title: "آزمون ارتقا عفونی ۱۴۰۳".into(),
            slug: slug("inf-1403")?,
            year: Some(1403),
            questions_count: 100,
            duration_minutes: 120,
            kind: ExamKind::PastYear,
        },
        Exam {
            id: ExamId::new(2),
            title: "آزمون ارتقا عفونی ۱۴۰۲".into(),
            slug: slug("inf-1402")?,
            year: Some(1402),
            questions_count: 100,
            duration_minutes: 120,
            kind: ExamKind::PastYear,
        },
        Exam {
            id: ExamId::new(3),
            title: "آزمون جامع تألیفی عفونی - مباحث نوین".into(),
            slug: slug("inf-authored-1")?,
            year: None,
            questions_count: 50,
            duration_minutes: 60,
            kind: ExamKind::Authored,
        },
    ])
}

fn courses() -> Seeded<Vec<Course>> {
    let course = |id, key: &str, name: &str, reference: &str| -> Seeded<Course> {
        Ok(Course {
            id: CourseId::new(id),
            specialty_id: SpecialtyId::new(1),
            exam_level_id: ExamLevelId::new(3),
            subspecialty_id: Some(SubspecialtyId::new(1)),
            slug: slug(key)?,
            name_fa: name.into(),
            main_reference: reference.into(),
        })
    };
    [
        course(1, "harrison-inf", "بیماری‌های عفونی - هاریسون", "Harrison's Principles"),
        course(2, "mandell-anti", "آنتی‌بیوتیک‌ها - مندل", "Mandell Principles"),
    ]
    .into_iter()
    .collect()
}

fn chapters() -> Seeded<Vec<Chapter>> {
    let chapter = |id, key: &str, name: &str, topics_count| -> Seeded<Chapter> {
        Ok(Chapter {
            id: ChapterId::new(id),
            course_id: CourseId::new(1),
            slug: slug(key)?,
            name_fa: name.into(),
            topics_count,
        })
    };
    [
        chapter(1, "bacterial", "عفونت‌های باکتریال", 12),
        chapter(2, "viral", "عفونت‌های ویروسی", 10),
        chapter(3, "fungal", "عفونت‌های قارچی", 8),
    ]
    .into_iter()
    .collect()
}

fn topics() -> Seeded<Vec<Topic>> {
    let topic = |id, key: &str, name: &str, content: &str| -> Seeded<Topic> {
        Ok(Topic {
            id: TopicId::new(id),
            chapter_id: ChapterId::new(3),
            slug: slug(key)?,
            name_fa: name.into(),
            content: content.into(),
        })
    };
    [
        topic(1, "candidiasis", "کاندیدیازیس", CANDIDIASIS_CONTENT),
        topic(
            2,
            "aspergillosis",
            "آسپرژیلوزیس",
            "محتوای آموزشی مربوط به آسپرژیلوزیس...",
        ),
        topic(
            3,
            "mucormycosis",
            "موکورمیکوزیس",
            "محتوای آموزشی مربوط به موکورمیکوزیس...",
        ),
    ]
    .into_iter()
    .collect()
}

fn questions() -> Seeded<Vec<Question>> {
    [
        question(
            101,
            "بیمار 45 ساله HIV+ با لکوپلاکی سفید دهان مراجعه کرده. محتمل‌ترین تشخیص؟",
            ["لوکوپلاکی خوش‌خیم", "کاندیدیازیس دهانی", "کارسینوم سلول سنگفرشی", "لیکن پلان"],
            1,
            "کاندیدیازیس دهانی (Oral Thrush) شایع‌ترین عفونت قارچی دهان در بیماران HIV+ است.",
            "Harrison's Chapter 213, p.1543",
        ),
        question(
            102,
            "اولین خط درمان در کاندیدیازیس سیستمیک غیرنوتروپنیک کدام است؟",
            ["آمفوتریسین B", "فلوکونازول", "کاسپوفونژین", "وریکونازول"],
            2,
            "اکینوکاندین‌ها (مانند کاسپوفونژین) در حال حاضر به عنوان خط اول در موارد شدید و سیستمیک توصیه می‌شوند.",
            "Mandell Principles",
        ),
        question(
            201,
            "شایع‌ترین عامل عفونت خون بیمارستانی کدام است؟",
            ["استافیلوکوکوس اورئوس", "استرپتوکوکوس پنومونیه", "اشرشیا کلی", "سودوموناس آئروژینوزا"],
            0,
            "استافیلوکوکوس اورئوس شایع‌ترین عامل باکتریمی بیمارستانی است.",
            "Harrison's Principles",
        ),
        question(
            202,
            "کدام آنتی‌بیوتیک برای درمان اولیه کاندیدیازیس دهانی در بیمار HIV+ ارجح است؟",
            ["نیستاتین", "فلوکونازول", "آمفوتریسین B", "کاسپوفونژین"],
            1,
            "فلوکونازول خوراکی درمان انتخابی کاندیدیازیس دهانی در بیماران HIV+ است.",
            "Mandell Principles",
        ),
    ]
    .into_iter()
    .collect()
}

fn question_sets() -> Vec<QuestionSet> {
    let ids = |ids: &[u64]| ids.iter().copied().map(QuestionId::new).collect();
    vec![
        QuestionSet {
            owner: QuestionOwner::Topic(TopicId::new(1)),
            questions: ids(&[101, 102]),
        },
        QuestionSet {
            owner: QuestionOwner::Exam(ExamId::new(1)),
            questions: ids(&[201, 202]),
        },
        QuestionSet {
            owner: QuestionOwner::Exam(ExamId::new(3)),
            questions: ids(&[201, 101, 202, 102]),
        },
    ]
}

/// The sample catalog shipped with the app.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if a seed slug or question is malformed.
pub fn builtin_catalog() -> Result<Catalog, StorageError> {
    Ok(Catalog {
        specialties: specialties()?,
        exam_levels: exam_levels()?,
        subspecialties: subspecialties()?,
        courses: courses()?,
        chapters: chapters()?,
        topics: topics()?,
        exams: exams()?,
        questions: questions()?,
        question_sets: question_sets(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_consistent() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.validate(), Vec::new());
        assert_eq!(catalog.questions.len(), 4);
    }

    #[test]
    fn malformed_seed_entries_are_errors() {
        let err = slug("Not A Slug").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));

        let err = question(9, "q", ["a", "b", "c", "d"], 4, "", "").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(ref msg) if msg.contains("9")));
    }

    #[test]
    fn declared_topic_counts_are_kept_as_is() {
        let catalog = builtin_catalog().unwrap();
        let fungal = catalog
            .chapters
            .iter()
            .find(|c| c.slug.as_str() == "fungal")
            .unwrap();
        assert_eq!(fungal.topics_count, 8);
        let actual = catalog
            .topics
            .iter()
            .filter(|t| t.chapter_id == fungal.id)
            .count();
        assert_eq!(actual, 3);
    }

    #[test]
    fn candidiasis_quiz_has_two_questions() {
        let catalog = builtin_catalog().unwrap();
        let questions = catalog.questions_for(QuestionOwner::Topic(TopicId::new(1)));
        let correct: Vec<_> = questions.iter().map(|q| q.correct_index()).collect();
        assert_eq!(correct, vec![1, 2]);
    }
}
