//! Sample data loaded once at startup.

use vita_core::domain::{
    Commonness, ConnectionStatus, EntityId, NewClinicalCategory, NewClinicalCondition,
    NewConnection, NewCourse, NewCourseCategory, NewForumCategory, NewForumPost, NewProfessional,
    NewProfessionalSpecialty, NewUser, Severity, Vote,
};
use vita_core::error::RepoError;
use vita_core::ports::{
    ClinicalRepository, ConnectionRepository, CourseRepository, ForumRepository,
    ProfessionalRepository, UserRepository,
};

use super::InMemoryStore;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Populate an empty store with the demo data set.
pub async fn load(store: &InMemoryStore) -> Result<(), RepoError> {
    load_clinical(store).await?;

    let forum = load_forum_categories(store).await?;
    load_courses(store).await?;
    load_professionals(store).await?;
    let users = load_users(store).await?;

    // Matched pairs are stored as two edges, one per direction.
    for &(a, b) in &[(users[0], users[1]), (users[0], users[3])] {
        for (from, to) in [(a, b), (b, a)] {
            store
                .create_connection(NewConnection {
                    user_id: from,
                    target_user_id: to,
                    status: ConnectionStatus::Matched,
                })
                .await?;
        }
    }

    let posts = [
        (
            "Qual è la vostra esperienza con il parto naturale vs. cesareo?",
            "Sono alla 30ma settimana e sto valutando le opzioni. Vorrei tanto sapere le vostre esperienze personali, pro e contro, e come vi siete preparate.",
            users[0],
            forum[0],
            128,
        ),
        (
            "Rimedi naturali che hanno funzionato per le vampate di calore",
            "Dopo tanto sperimentare, ho trovato alcune tecniche che mi hanno davvero aiutato con le vampate senza ricorrere a farmaci. Vi condivido la mia esperienza e vorrei sapere cosa ha funzionato per voi.",
            users[2],
            forum[1],
            86,
        ),
        (
            "[AMA] Sono un ginecologo con 20 anni di esperienza. Chiedetemi quello che volete!",
            "Ciao a tutte! Sono qui per rispondere alle vostre domande su ciclo mestruale, contraccezione, salute riproduttiva e qualsiasi altro dubbio abbiate. Nessuna domanda è troppo imbarazzante.",
            users[1],
            forum[2],
            214,
        ),
    ];
    for (title, content, user_id, category_id, upvotes) in posts {
        let post = store
            .create_post(NewForumPost {
                title: title.to_string(),
                content: content.to_string(),
                user_id,
                category_id,
            })
            .await?;
        // Posts always start at zero; replay the votes they had collected.
        for _ in 0..upvotes {
            store.vote(post.id, user_id, Vote::Up).await?;
        }
    }

    tracing::info!(users = users.len(), "Seed data loaded");
    Ok(())
}

async fn load_clinical(store: &InMemoryStore) -> Result<(), RepoError> {
    let mut categories = Vec::new();
    for (name, description) in [
        (
            "Salute riproduttiva",
            "Condizioni legate al sistema riproduttivo femminile",
        ),
        ("Gravidanza", "Condizioni e cambiamenti durante la gravidanza"),
        ("Menopausa", "Condizioni legate alla menopausa e perimenopausa"),
        ("Seno", "Condizioni del seno e relativi sintomi"),
    ] {
        let category = store
            .create_clinical_category(NewClinicalCategory {
                name: name.to_string(),
                description: description.to_string(),
            })
            .await?;
        categories.push(category.id);
    }
    let (reproductive, pregnancy, menopause, breast) =
        (categories[0], categories[1], categories[2], categories[3]);

    let conditions = [
        (
            "Endometriosi",
            "L'endometriosi è una condizione in cui il tessuto che normalmente riveste l'interno dell'utero (l'endometrio) cresce all'esterno dell'utero, tipicamente sulle ovaie, sulle tube di Falloppio e sul tessuto che riveste il bacino.",
            "Dolore pelvico, dolore durante il ciclo mestruale, dolore durante i rapporti, sanguinamento anomalo, problemi di fertilità",
            reproductive,
            "https://images.unsplash.com/photo-1579684385127-1ef15d508118?auto=format&fit=crop&w=800&q=60",
            "Trattamenti ormonali, chirurgia, gestione del dolore",
            Severity::Medium,
            Commonness::Common,
        ),
        (
            "Sindrome dell'ovaio policistico (PCOS)",
            "La PCOS è una condizione ormonale comune che colpisce le donne in età riproduttiva, caratterizzata da livelli elevati di androgeni, cisti ovariche e irregolarità mestruali.",
            "Irregolarità mestruali, acne, crescita eccessiva di peli, aumento di peso, difficoltà a concepire",
            reproductive,
            "https://images.unsplash.com/photo-1618615304438-db01b0a96573?auto=format&fit=crop&w=800&q=60",
            "Cambiamenti nello stile di vita, farmaci ormonali, gestione dei sintomi",
            Severity::Medium,
            Commonness::Common,
        ),
        (
            "Fibromi uterini",
            "I fibromi uterini sono tumori benigni non cancerosi che crescono nell'utero o sulla parete uterina.",
            "Mestruazioni abbondanti, dolore pelvico, pressione, frequente necessità di urinare",
            reproductive,
            "https://images.unsplash.com/photo-1581595219315-a187dd40c322?auto=format&fit=crop&w=800&q=60",
            "Farmaci, procedure minimamente invasive, intervento chirurgico",
            Severity::Medium,
            Commonness::Common,
        ),
        (
            "Diabete gestazionale",
            "Il diabete gestazionale è un tipo di diabete che si sviluppa durante la gravidanza in donne che non avevano il diabete prima.",
            "Spesso asintomatico, ma può causare sete eccessiva, minzione frequente e stanchezza",
            pregnancy,
            "https://images.unsplash.com/photo-1579165466991-467135ad3110?auto=format&fit=crop&w=800&q=60",
            "Dieta, esercizio fisico, monitoraggio della glicemia, insulina se necessario",
            Severity::Medium,
            Commonness::Occasional,
        ),
        (
            "Preeclampsia",
            "La preeclampsia è una complicazione della gravidanza caratterizzata da pressione alta e segni di danno ad altri organi, spesso al fegato e ai reni.",
            "Pressione alta, proteine nelle urine, gonfiore, mal di testa, visione offuscata",
            pregnancy,
            "https://images.unsplash.com/photo-1547489432-75c3789fe783?auto=format&fit=crop&w=800&q=60",
            "Monitoraggio, parto anticipato se necessario, farmaci per la pressione",
            Severity::High,
            Commonness::Occasional,
        ),
        (
            "Vampate di calore",
            "Le vampate di calore sono un sintomo comune della menopausa, caratterizzate da una sensazione improvvisa di calore intenso nella parte superiore del corpo.",
            "Sensazione improvvisa di calore, rossore al viso e collo, sudorazione, battito cardiaco accelerato",
            menopause,
            "https://images.unsplash.com/photo-1584286574620-3cb49d0b18d1?auto=format&fit=crop&w=800&q=60",
            "Terapia ormonale sostitutiva, cambiamenti nello stile di vita, farmaci non ormonali",
            Severity::Low,
            Commonness::Common,
        ),
        (
            "Mastite",
            "La mastite è un'infiammazione del tessuto mammario che a volte coinvolge un'infezione. La condizione può verificarsi durante l'allattamento.",
            "Dolore, gonfiore, arrossamento, calore nel seno, febbre, sensazione di malessere",
            breast,
            "https://images.unsplash.com/photo-1579165466676-349b282fb3ac?auto=format&fit=crop&w=800&q=60",
            "Antibiotici, antidolorifici, continuare ad allattare o estrarre il latte",
            Severity::Medium,
            Commonness::Occasional,
        ),
    ];

    for (name, description, symptoms, category_id, image, treatment, severity, commonness) in
        conditions
    {
        store
            .create_condition(NewClinicalCondition {
                name: name.to_string(),
                description: description.to_string(),
                symptoms: symptoms.to_string(),
                category_id,
                image: image.to_string(),
                treatment_info: Some(treatment.to_string()),
                severity,
                commonness,
            })
            .await?;
    }
    Ok(())
}

async fn load_forum_categories(store: &InMemoryStore) -> Result<Vec<EntityId>, RepoError> {
    let mut ids = Vec::new();
    for (name, description, icon) in [
        ("Gravidanza", "Discussioni sulla gravidanza", "baby-carriage"),
        ("Menopausa", "Discussioni sulla menopausa", "temperature-high"),
        (
            "Salute generale",
            "Discussioni sulla salute generale femminile",
            "heartbeat",
        ),
    ] {
        let category = store
            .create_forum_category(NewForumCategory {
                name: name.to_string(),
                description: description.to_string(),
                icon: icon.to_string(),
            })
            .await?;
        ids.push(category.id);
    }
    Ok(ids)
}

async fn load_courses(store: &InMemoryStore) -> Result<(), RepoError> {
    let mut categories = Vec::new();
    for (name, description) in [
        ("Pre parto", "Corsi per la preparazione al parto"),
        ("Postpartum", "Corsi per il periodo post parto"),
        ("Menopausa", "Corsi sulla gestione della menopausa"),
        ("Fertilità", "Corsi sulla fertilità"),
        ("Benessere generale", "Corsi sul benessere generale"),
    ] {
        let category = store
            .create_course_category(NewCourseCategory {
                name: name.to_string(),
                description: Some(description.to_string()),
            })
            .await?;
        categories.push(category.id);
    }
    let (prenatal, postpartum, menopause) = (categories[0], categories[1], categories[2]);

    let courses = [
        (
            "Preparazione completa al parto naturale",
            "Guida completa alla preparazione per un parto naturale",
            prenatal,
            "8 settimane",
            12900,
            "https://images.unsplash.com/photo-1531983412531-1f49a365ffed?auto=format&fit=crop&w=600&h=300",
            true,
        ),
        (
            "Yoga prenatale per ogni trimestre",
            "Esercizi e pose adatte ad ogni fase della gravidanza",
            prenatal,
            "6 settimane",
            8900,
            "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?auto=format&fit=crop&w=600&h=300",
            false,
        ),
        (
            "Vivere bene la menopausa",
            "Strategie alimentari e di stile di vita per la transizione",
            menopause,
            "4 settimane",
            7500,
            "https://images.unsplash.com/photo-1573497620053-ea5300f94f21?auto=format&fit=crop&w=600&h=300",
            false,
        ),
        (
            "Primi 3 mesi con il tuo bambino",
            "Guida completa alla cura del neonato e al recupero post-parto",
            postpartum,
            "8 settimane",
            9900,
            "https://images.unsplash.com/photo-1555252333-9f8e92e65df9?auto=format&fit=crop&w=600&h=300",
            false,
        ),
    ];
    for (title, description, category_id, duration, price, image, featured) in courses {
        store
            .create_course(NewCourse {
                title: title.to_string(),
                description: description.to_string(),
                category_id,
                duration: duration.to_string(),
                price,
                image: image.to_string(),
                featured,
            })
            .await?;
    }
    Ok(())
}

async fn load_professionals(store: &InMemoryStore) -> Result<(), RepoError> {
    let mut specialties = Vec::new();
    for name in [
        "Ginecologo",
        "Ostetrica",
        "Endocrinologo",
        "Psicologo perinatale",
        "Fisioterapista pelvico",
    ] {
        let specialty = store
            .create_specialty(NewProfessionalSpecialty {
                name: name.to_string(),
            })
            .await?;
        specialties.push(specialty.id);
    }

    store
        .create_professional(NewProfessional {
            name: "Dott.ssa Marina Bianchi".to_string(),
            specialty_id: specialties[0],
            bio: "15+ anni di esperienza. Ha seguito oltre 1000 gravidanze e si occupa di salute della donna in tutte le fasi della vita.".to_string(),
            address: "Via Garibaldi 45, Milano".to_string(),
            latitude: Some(45.4642),
            longitude: Some(9.1900),
            avatar: "https://images.unsplash.com/photo-1594824476967-48c8b964273f?auto=format&fit=crop&w=150&h=150".to_string(),
            experience: "15+ anni".to_string(),
            languages: strings(&["Italiano", "Inglese", "Francese"]),
            specializations: strings(&["Gravidanza ad alto rischio", "Fertilità", "Menopausa"]),
        })
        .await?;

    store
        .create_professional(NewProfessional {
            name: "Francesca Rossi".to_string(),
            specialty_id: specialties[1],
            bio: "10 anni di esperienza in assistenza al parto naturale. Conduce corsi pre-parto e offre supporto nel postpartum.".to_string(),
            address: "Corso Venezia 12, Milano".to_string(),
            latitude: Some(45.4706),
            longitude: Some(9.1982),
            avatar: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?auto=format&fit=crop&w=150&h=150".to_string(),
            experience: "10 anni".to_string(),
            languages: strings(&["Italiano", "Inglese"]),
            specializations: strings(&["Preparazione al parto", "Assistenza domiciliare", "Allattamento"]),
        })
        .await?;
    Ok(())
}

async fn load_users(store: &InMemoryStore) -> Result<Vec<EntityId>, RepoError> {
    let profiles = [
        (
            "alessia32",
            "Alessia",
            32,
            "Sono al secondo trimestre e cerco altre mamme per condividere l'esperienza.",
            &["Gravidanza", "Yoga"],
            "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=800&h=1000",
            (45.4642, 9.1900),
        ),
        (
            "marina_mom",
            "Marina",
            28,
            "Neo mamma alla ricerca di consigli e supporto.",
            &["Postpartum", "Allattamento"],
            "https://images.unsplash.com/photo-1546961329-78bef0414d7c?auto=format&fit=crop&w=150&h=150",
            (45.4706, 9.1982),
        ),
        (
            "giulia_45",
            "Giulia",
            45,
            "Navigando la menopausa e cercando di mantenermi attiva.",
            &["Menopausa", "Fitness"],
            "https://images.unsplash.com/photo-1544005313-94ddf0286df2?auto=format&fit=crop&w=150&h=150",
            (45.4668, 9.1905),
        ),
        (
            "amara_wellness",
            "Amara",
            30,
            "Esperta di wellness, incinta del primo figlio.",
            &["Gravidanza", "Nutrizione"],
            "https://images.unsplash.com/photo-1611432579699-484f7990b127?auto=format&fit=crop&w=150&h=150",
            (45.4720, 9.1850),
        ),
        (
            "sofia_mom",
            "Sofia",
            34,
            "Mamma di due bambini, attualmente in fase postpartum.",
            &["Postpartum", "Sonno neonati"],
            "https://images.unsplash.com/photo-1508214751196-bcfd4ca60f91?auto=format&fit=crop&w=150&h=150",
            (45.4700, 9.1930),
        ),
    ];

    let mut ids = Vec::new();
    for (username, name, age, bio, interests, avatar, (lat, lng)) in profiles {
        let user = store
            .create_user(NewUser {
                username: username.to_string(),
                name: name.to_string(),
                age,
                bio: Some(bio.to_string()),
                avatar: Some(avatar.to_string()),
                latitude: Some(lat),
                longitude: Some(lng),
                interests: strings(interests),
            })
            .await?;
        ids.push(user.id);
    }
    Ok(ids)
}
